use gbqschema_core::{
    AliasPolicy, ColumnType, DATETIME_PATTERN, JsonType, ObjectDef, PropertyType, TIME_PATTERN,
    column_type_for, schema_fragment,
};

#[test]
fn integer_aliases_collapse_to_one_fragment() {
    let expected = schema_fragment(ColumnType::Integer);
    assert_eq!(expected.json_type, JsonType::Integer);
    assert_eq!(expected.format, None);
    assert_eq!(expected.pattern, None);

    assert_eq!(schema_fragment(ColumnType::Int), expected);
    assert_eq!(schema_fragment(ColumnType::Int64), expected);
}

#[test]
fn collapsed_fragment_maps_back_to_a_single_name() {
    let property: PropertyType = schema_fragment(ColumnType::Int).into();

    assert_eq!(
        column_type_for(&property, AliasPolicy::Canonical),
        ColumnType::Integer
    );
    assert_eq!(
        column_type_for(&property, AliasPolicy::Preserve64Bit),
        ColumnType::Int64
    );
}

#[test]
fn scalar_fragments() {
    let expected = vec![
        (ColumnType::Float, JsonType::Number, None, None),
        (ColumnType::Float64, JsonType::Number, None, None),
        (ColumnType::Numeric, JsonType::Number, None, None),
        (ColumnType::Bool, JsonType::Boolean, None, None),
        (ColumnType::Boolean, JsonType::Boolean, None, None),
        (ColumnType::String, JsonType::String, None, None),
        (ColumnType::Bytes, JsonType::String, None, None),
        (ColumnType::Date, JsonType::String, Some("date"), None),
        (
            ColumnType::Datetime,
            JsonType::String,
            None,
            Some(DATETIME_PATTERN),
        ),
        (ColumnType::Time, JsonType::String, Some("time"), None),
        (ColumnType::Timestamp, JsonType::String, Some("date-time"), None),
        (ColumnType::Record, JsonType::Object, None, None),
    ];

    for (column_type, json_type, format, pattern) in expected {
        let fragment = schema_fragment(column_type);
        assert_eq!(fragment.json_type, json_type, "{column_type}");
        assert_eq!(fragment.format, format, "{column_type}");
        assert_eq!(fragment.pattern, pattern, "{column_type}");
    }
}

#[test]
fn canonical_types_survive_the_inverse() {
    for column_type in [
        ColumnType::Integer,
        ColumnType::Numeric,
        ColumnType::Boolean,
        ColumnType::String,
        ColumnType::Date,
        ColumnType::Datetime,
        ColumnType::Time,
        ColumnType::Timestamp,
        ColumnType::Record,
    ] {
        let property: PropertyType = schema_fragment(column_type).into();
        assert_eq!(
            column_type_for(&property, AliasPolicy::Canonical),
            column_type
        );
    }
}

#[test]
fn string_rules_prefer_format_then_pattern() {
    let time_by_pattern = PropertyType::string_with_pattern(TIME_PATTERN);
    assert_eq!(
        column_type_for(&time_by_pattern, AliasPolicy::Canonical),
        ColumnType::Time
    );

    let date_with_pattern = PropertyType::String {
        format: Some("date".to_string()),
        pattern: Some(TIME_PATTERN.to_string()),
    };
    assert_eq!(
        column_type_for(&date_with_pattern, AliasPolicy::Canonical),
        ColumnType::Date
    );

    let other_pattern = PropertyType::string_with_pattern("^[a-z]+$");
    assert_eq!(
        column_type_for(&other_pattern, AliasPolicy::Canonical),
        ColumnType::String
    );
}

#[test]
fn unknown_string_format_falls_back_to_string() {
    let email = PropertyType::string_with_format("email");
    assert_eq!(
        column_type_for(&email, AliasPolicy::Preserve64Bit),
        ColumnType::String
    );
}

#[test]
fn boolean_and_object_ignore_policy() {
    for policy in [AliasPolicy::Canonical, AliasPolicy::Preserve64Bit] {
        assert_eq!(
            column_type_for(&PropertyType::Boolean, policy),
            ColumnType::Boolean
        );
        assert_eq!(
            column_type_for(&PropertyType::Object(ObjectDef::default()), policy),
            ColumnType::Record
        );
    }
}
