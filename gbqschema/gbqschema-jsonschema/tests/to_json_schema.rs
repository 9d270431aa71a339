use gbqschema_core::{Column, ColumnType, Columns, Mode, PropertyType, TIME_PATTERN};
use gbqschema_jsonschema::{
    ConvertError, column_list_to_json_schema, columns_to_object_def, columns_to_schema_document,
};
use serde_json::{Value, json};

const DATETIME_PATTERN: &str = "^[0-9]{4}-((|0)[1-9]|1[0-2])-((|[0-2])[1-9]|3[0-1])(|T)((|[0-1])[0-9]|2[0-3]):((|[0-5])[0-9]):((|[0-5])[0-9])(|.[0-9]{1,6})$";

fn element(document: &Value) -> &Value {
    &document["definitions"]["element"]
}

#[test]
fn nullable_int64_with_description() {
    let columns = json!([
        {"name": "att_01", "type": "INT64", "mode": "NULLABLE", "description": "Att 1"}
    ]);

    let document = column_list_to_json_schema(&columns, false).unwrap();

    assert_eq!(
        element(&document)["properties"]["att_01"],
        json!({"type": "integer", "description": "Att 1"})
    );
    assert_eq!(element(&document)["required"], json!([]));
}

#[test]
fn every_scalar_type() {
    let columns = json!([
        {"description": "Att 1", "name": "att_01", "type": "INT64", "mode": "NULLABLE"},
        {"description": "Att 2", "name": "att_02", "type": "FLOAT64", "mode": "REQUIRED"},
        {"name": "att_03", "type": "NUMERIC", "mode": "REQUIRED"},
        {"name": "att_04", "type": "STRING", "mode": "REQUIRED"},
        {"name": "att_05", "type": "BOOL", "mode": "REQUIRED"},
        {"name": "att_06", "type": "BOOLEAN", "mode": "REQUIRED"},
        {"name": "att_07", "type": "BYTES", "mode": "REQUIRED"},
        {"name": "att_08", "type": "DATE", "mode": "REQUIRED"},
        {"name": "att_09", "type": "DATETIME", "mode": "REQUIRED"},
        {"name": "att_10", "type": "TIMESTAMP", "mode": "REQUIRED"},
        {"name": "att_11", "type": "TIME", "mode": "REQUIRED"},
        {"name": "att_12", "type": "INT", "mode": "REQUIRED"},
        {"name": "att_13", "type": "INTEGER", "mode": "REQUIRED"},
        {"name": "att_14", "type": "FLOAT", "mode": "REQUIRED"}
    ]);

    let expected = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "array",
        "items": {"$ref": "#/definitions/element"},
        "definitions": {
            "element": {
                "type": "object",
                "properties": {
                    "att_01": {"type": "integer", "description": "Att 1"},
                    "att_02": {"type": "number", "description": "Att 2"},
                    "att_03": {"type": "number"},
                    "att_04": {"type": "string"},
                    "att_05": {"type": "boolean"},
                    "att_06": {"type": "boolean"},
                    "att_07": {"type": "string"},
                    "att_08": {"type": "string", "format": "date"},
                    "att_09": {"type": "string", "pattern": DATETIME_PATTERN},
                    "att_10": {"type": "string", "format": "date-time"},
                    "att_11": {"type": "string", "format": "time"},
                    "att_12": {"type": "integer"},
                    "att_13": {"type": "integer"},
                    "att_14": {"type": "number"}
                },
                "additionalProperties": true,
                "required": [
                    "att_02", "att_03", "att_04", "att_05", "att_06", "att_07",
                    "att_08", "att_09", "att_10", "att_11", "att_12", "att_13", "att_14"
                ]
            }
        }
    });

    let document = column_list_to_json_schema(&columns, true).unwrap();
    assert_eq!(document, expected);
}

#[test]
fn properties_keep_input_order() {
    let columns = json!([
        {"name": "zeta", "type": "STRING"},
        {"name": "alpha", "type": "STRING"},
        {"name": "mid", "type": "STRING"}
    ]);

    let document = column_list_to_json_schema(&columns, false).unwrap();
    let names: Vec<&str> = element(&document)["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn additional_properties_defaults_to_false() {
    let columns = json!([{"name": "a", "type": "STRING"}]);

    let document = column_list_to_json_schema(&columns, false).unwrap();

    assert_eq!(element(&document)["additionalProperties"], json!(false));
}

#[test]
fn missing_or_null_mode_is_nullable() {
    let columns = json!([
        {"name": "a", "type": "STRING"},
        {"name": "b", "type": "STRING", "mode": null},
        {"name": "c", "type": "STRING", "mode": "REQUIRED", "description": null}
    ]);

    let document = column_list_to_json_schema(&columns, false).unwrap();

    assert_eq!(element(&document)["required"], json!(["c"]));
    assert_eq!(element(&document)["properties"]["c"], json!({"type": "string"}));
}

#[test]
fn nested_record_builds_object_property() {
    let columns = json!([
        {"description": "Att 1", "name": "att_01", "type": "INT64", "mode": "REQUIRED"},
        {
            "description": "Att 2",
            "name": "att_02",
            "type": "RECORD",
            "mode": "NULLABLE",
            "fields": [
                {"name": "att_11", "type": "FLOAT64", "mode": "REQUIRED"},
                {"name": "att_12", "type": "STRING", "mode": "NULLABLE"}
            ]
        }
    ]);

    let document = column_list_to_json_schema(&columns, false).unwrap();

    assert_eq!(
        element(&document)["properties"]["att_02"],
        json!({
            "type": "object",
            "description": "Att 2",
            "properties": {
                "att_11": {"type": "number"},
                "att_12": {"type": "string"}
            },
            "additionalProperties": false,
            "required": ["att_11"]
        })
    );
    assert_eq!(element(&document)["required"], json!(["att_01"]));
}

#[test]
fn invalid_input_produces_no_document() {
    let columns = json!([
        {"name": "ok", "type": "STRING"},
        {"name": "bad", "type": "FFA", "mode": "REQUIRED"}
    ]);

    let err = column_list_to_json_schema(&columns, false).unwrap_err();

    assert!(matches!(err, ConvertError::Validation(_)));
}

#[test]
fn required_set_matches_modes() {
    let columns: Columns = vec![
        Column::new("a", ColumnType::Integer, Mode::Required),
        Column::new("b", ColumnType::Time, Mode::Nullable),
        Column::new("c", ColumnType::Date, Mode::Required),
    ]
    .into();

    let object = columns_to_object_def(&columns, false);

    for column in columns.iter() {
        assert_eq!(
            object.is_required(&column.name),
            column.mode == Mode::Required,
            "{}",
            column.name
        );
    }
    assert_eq!(object.required, ["a", "c"]);
}

#[test]
fn typed_duplicates_keep_last_definition() {
    let columns: Columns = vec![
        Column::new("a", ColumnType::Integer, Mode::Required),
        Column::new("a", ColumnType::String, Mode::Nullable),
    ]
    .into();

    let document = columns_to_schema_document(&columns, false);

    assert_eq!(document.element.properties.len(), 1);
    assert_eq!(
        document.element.properties[0].property_type,
        PropertyType::string()
    );
    assert!(document.element.required.is_empty());
}

#[test]
fn time_pattern_is_not_emitted_for_time_columns() {
    let columns: Columns = vec![Column::new("t", ColumnType::Time, Mode::Nullable)].into();

    let object = columns_to_object_def(&columns, false);

    assert_eq!(
        object.properties[0].property_type,
        PropertyType::string_with_format("time")
    );
    assert_ne!(
        object.properties[0].property_type,
        PropertyType::string_with_pattern(TIME_PATTERN)
    );
}
