//! Column list → JSON Schema document.

use gbqschema_core::{
    Column, ColumnType, Columns, ObjectDef, PropertyDef, PropertyType, SchemaDocument,
    schema_fragment,
};
use serde_json::Value;
use tracing::debug;

use crate::{ConvertError, validate::validate_column_list};

/// Converts a column list in BigQuery JSON representation into a JSON Schema
/// document.
///
/// The input is validated first; on failure nothing is converted. Every
/// generated object node, including nested records, carries
/// `additionalProperties: additional_properties`.
pub fn column_list_to_json_schema(
    columns: &Value,
    additional_properties: bool,
) -> Result<Value, ConvertError> {
    validate_column_list(columns)?;
    let columns: Columns = serde_json::from_value(columns.clone())?;
    let document = columns_to_schema_document(&columns, additional_properties);
    Ok(document.to_value())
}

/// Builds the document for already-typed columns.
///
/// No validation happens here; a repeated name replaces the earlier property.
pub fn columns_to_schema_document(columns: &Columns, additional_properties: bool) -> SchemaDocument {
    let element = columns_to_object_def(columns, additional_properties);
    debug!(
        properties = element.properties.len(),
        required = element.required.len(),
        "converted column list to JSON Schema"
    );
    SchemaDocument::new(element)
}

/// Builds one object node from a field list.
pub fn columns_to_object_def(columns: &Columns, additional_properties: bool) -> ObjectDef {
    let mut object = ObjectDef::new(Some(additional_properties));
    for column in columns.iter() {
        object.insert(
            column_to_property_def(column, additional_properties),
            column.mode.is_required(),
        );
    }
    object
}

fn column_to_property_def(column: &Column, additional_properties: bool) -> PropertyDef {
    let property_type = match column.column_type {
        ColumnType::Record => {
            PropertyType::Object(columns_to_object_def(&column.fields, additional_properties))
        }
        scalar => schema_fragment(scalar).into(),
    };
    PropertyDef {
        name: column.name.clone(),
        property_type,
        description: column.description.clone(),
    }
}
