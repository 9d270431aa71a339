//! JSON Schema document → column list.

use gbqschema_core::{
    AliasPolicy, Column, Columns, FORMAT_DATE, FORMAT_DATE_TIME, FORMAT_TIME, JsonType, Mode,
    ObjectDef, PropertyDef, PropertyType, column_type_for,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{ConvertError, validate::validate_schema_document};

/// Keys searched, in order, for named object schemas.
const DEFINITION_KEYS: [&str; 2] = ["definitions", "$defs"];

/// Converts a JSON Schema document into a column list in BigQuery JSON
/// representation, using [`AliasPolicy::Canonical`] names.
pub fn json_schema_to_column_list(document: &Value) -> Result<Value, ConvertError> {
    json_schema_to_column_list_with_policy(document, AliasPolicy::default())
}

/// Converts a JSON Schema document into a column list with an alias policy.
pub fn json_schema_to_column_list_with_policy(
    document: &Value,
    policy: AliasPolicy,
) -> Result<Value, ConvertError> {
    let columns = json_schema_to_columns_with_policy(document, policy)?;
    Ok(serde_json::to_value(columns)?)
}

/// Typed variant of [`json_schema_to_column_list`].
pub fn json_schema_to_columns(document: &Value) -> Result<Columns, ConvertError> {
    json_schema_to_columns_with_policy(document, AliasPolicy::default())
}

/// Typed variant of [`json_schema_to_column_list_with_policy`].
///
/// The document must compile as a JSON Schema. Columns are collected from
/// every object schema under `definitions` (or `$defs`); without those, from
/// an inline object under `items`; otherwise from the root `properties`.
pub fn json_schema_to_columns_with_policy(
    document: &Value,
    policy: AliasPolicy,
) -> Result<Columns, ConvertError> {
    validate_schema_document(document)?;

    let mut columns = Vec::new();
    for (path, node) in root_objects(document)? {
        let object = parse_object(node, &path)?;
        columns.extend(object_def_to_columns(&object, policy));
    }
    debug!(columns = columns.len(), "converted JSON Schema to column list");
    Ok(columns.into())
}

/// Turns an object node into its field list, in property order.
pub fn object_def_to_columns(object: &ObjectDef, policy: AliasPolicy) -> Columns {
    object
        .properties
        .iter()
        .map(|property| property_def_to_column(object, property, policy))
        .collect()
}

fn property_def_to_column(parent: &ObjectDef, property: &PropertyDef, policy: AliasPolicy) -> Column {
    let fields = match &property.property_type {
        PropertyType::Object(nested) => object_def_to_columns(nested, policy),
        _ => Columns::default(),
    };
    let mode = if parent.is_required(&property.name) {
        Mode::Required
    } else {
        Mode::Nullable
    };
    Column {
        description: property.description.clone(),
        name: property.name.clone(),
        column_type: column_type_for(&property.property_type, policy),
        mode,
        fields,
    }
}

fn root_objects(document: &Value) -> Result<Vec<(String, &Map<String, Value>)>, ConvertError> {
    let root = document
        .as_object()
        .ok_or_else(|| ConvertError::malformed("#", "document must be an object"))?;

    for key in DEFINITION_KEYS {
        let Some(definitions) = root.get(key) else {
            continue;
        };
        let definitions = definitions
            .as_object()
            .ok_or_else(|| ConvertError::malformed(format!("#/{key}"), "must be an object"))?;
        let objects = definitions
            .iter()
            .filter_map(|(name, definition)| {
                let definition = definition.as_object()?;
                if definition.contains_key("properties") {
                    Some((format!("#/{key}/{name}"), definition))
                } else {
                    debug!(definition = %name, "skipping definition without properties");
                    None
                }
            })
            .collect();
        return Ok(objects);
    }

    if let Some(items) = root.get("items").and_then(Value::as_object) {
        if items.contains_key("properties") {
            return Ok(vec![("#/items".to_string(), items)]);
        }
    }

    if root.contains_key("properties") {
        return Ok(vec![("#".to_string(), root)]);
    }

    Err(ConvertError::malformed(
        "#",
        "no object schema with properties found in definitions, items or root",
    ))
}

fn parse_object(node: &Map<String, Value>, path: &str) -> Result<ObjectDef, ConvertError> {
    let properties = match node.get("properties") {
        Some(Value::Object(properties)) => properties,
        Some(_) => {
            return Err(ConvertError::malformed(
                format!("{path}/properties"),
                "must be an object",
            ));
        }
        None => return Err(ConvertError::malformed(path, "object has no properties")),
    };

    let required = match node.get("required") {
        None => Vec::new(),
        Some(Value::Array(names)) => names
            .iter()
            .map(|name| {
                name.as_str().map(str::to_string).ok_or_else(|| {
                    ConvertError::malformed(format!("{path}/required"), "must list strings")
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(ConvertError::malformed(
                format!("{path}/required"),
                "must be an array",
            ));
        }
    };

    let properties = properties
        .iter()
        .map(|(name, schema)| parse_property(name, schema, &format!("{path}/properties/{name}")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ObjectDef {
        properties,
        required,
        additional_properties: node.get("additionalProperties").and_then(Value::as_bool),
    })
}

fn parse_property(name: &str, schema: &Value, path: &str) -> Result<PropertyDef, ConvertError> {
    let schema = schema
        .as_object()
        .ok_or_else(|| ConvertError::malformed(path, "property schema must be an object"))?;

    let json_type = match schema.get("type") {
        Some(Value::String(found)) => {
            found
                .parse::<JsonType>()
                .map_err(|_| ConvertError::UnsupportedType {
                    path: path.to_string(),
                    found: format!("'{found}'"),
                })?
        }
        Some(other) => {
            return Err(ConvertError::UnsupportedType {
                path: path.to_string(),
                found: other.to_string(),
            });
        }
        None => {
            return Err(ConvertError::UnsupportedType {
                path: path.to_string(),
                found: "(missing)".to_string(),
            });
        }
    };

    let property_type = match json_type {
        JsonType::Integer => PropertyType::Integer,
        JsonType::Number => PropertyType::Number,
        JsonType::Boolean => PropertyType::Boolean,
        JsonType::String => {
            let format = string_keyword(schema, "format");
            if let Some(format) = format.as_deref() {
                if ![FORMAT_DATE, FORMAT_DATE_TIME, FORMAT_TIME].contains(&format) {
                    warn!(property = %path, format, "unknown string format, mapping to STRING");
                }
            }
            PropertyType::String {
                format,
                pattern: string_keyword(schema, "pattern"),
            }
        }
        JsonType::Object => {
            let nested = parse_object(schema, path)?;
            if nested.properties.is_empty() {
                return Err(ConvertError::malformed(
                    path,
                    "object property must declare at least one property",
                ));
            }
            PropertyType::Object(nested)
        }
    };

    Ok(PropertyDef {
        name: name.to_string(),
        property_type,
        description: string_keyword(schema, "description"),
    })
}

fn string_keyword(schema: &Map<String, Value>, key: &str) -> Option<String> {
    schema.get(key).and_then(Value::as_str).map(str::to_string)
}
