use std::{collections::HashMap, sync::LazyLock};

use gbqschema_core::{ColumnType, DRAFT_07, Mode};
use jsonschema::Validator;
use serde_json::{Value, json};

use crate::SchemaValidationError;

/// Root name used when rendering instance paths (`data[0].type`).
const ROOT: &str = "data";

const COLUMN_KEYS: [&str; 5] = ["description", "name", "type", "mode", "fields"];
const REQUIRED_KEYS: [&str; 2] = ["name", "type"];

static COLUMN_LIST_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&column_list_schema())
        .expect("built-in column list schema must compile")
});

fn column_list_schema() -> Value {
    let types: Vec<&str> = ColumnType::ALL.iter().map(ColumnType::as_str).collect();
    let mut modes: Vec<Value> = Mode::ALL.iter().map(|m| m.as_str().into()).collect();
    modes.push(Value::Null);

    json!({
        "$schema": DRAFT_07,
        "type": "array",
        "items": { "$ref": "#/definitions/column" },
        "definitions": {
            "column": {
                "type": "object",
                "required": REQUIRED_KEYS,
                "properties": {
                    "description": { "type": ["string", "null"] },
                    "name": { "type": "string", "minLength": 1 },
                    "type": { "enum": types },
                    "mode": { "enum": modes },
                    "fields": {
                        "type": "array",
                        "minItems": 1,
                        "items": { "$ref": "#/definitions/column" }
                    }
                },
                "additionalProperties": false,
                "if": {
                    "required": ["type"],
                    "properties": { "type": { "const": ColumnType::Record.as_str() } }
                },
                "then": { "required": ["fields"] },
                "else": { "not": { "required": ["fields"] } }
            }
        }
    })
}

/// Checks a column list before conversion and reports the first violation.
///
/// Beyond the structural schema, names must be unique within each field list.
pub fn validate_column_list(columns: &Value) -> Result<(), SchemaValidationError> {
    if let Some(error) = COLUMN_LIST_VALIDATOR.iter_errors(columns).next() {
        let instance_path = error.instance_path.to_string();
        let schema_path = error.schema_path.to_string();
        let keyword = schema_path.rsplit('/').next().unwrap_or_default();
        let reason = describe(columns, &instance_path, keyword)
            .unwrap_or_else(|| error.to_string());
        return Err(SchemaValidationError::new(display_path(&instance_path), reason));
    }
    check_unique_names(columns, ROOT)
}

/// Phrases a violation by the keyword that rejected it.
fn describe(columns: &Value, instance_path: &str, keyword: &str) -> Option<String> {
    let instance = columns.pointer(instance_path)?;
    let segment = instance_path.rsplit('/').next().unwrap_or_default();

    let reason = match keyword {
        "enum" => match segment {
            "type" => format!(
                "must be one of {}",
                quoted(ColumnType::ALL.iter().map(ColumnType::as_str))
            ),
            "mode" => format!(
                "must be one of {} or null",
                quoted(Mode::ALL.iter().map(Mode::as_str))
            ),
            _ => return None,
        },
        "additionalProperties" => {
            let unexpected = instance
                .as_object()?
                .keys()
                .map(String::as_str)
                .filter(|key| !COLUMN_KEYS.contains(key));
            format!("must not contain {} properties", braced(unexpected))
        }
        "required" => {
            let object = instance.as_object()?;
            let missing: Vec<&str> = REQUIRED_KEYS
                .into_iter()
                .filter(|key| !object.contains_key(*key))
                .collect();
            if missing.is_empty() {
                format!(
                    "must contain [\"fields\"] properties when type is {}",
                    ColumnType::Record
                )
            } else {
                format!("must contain {} properties", quoted(missing))
            }
        }
        "not" => format!("must not contain fields unless type is {}", ColumnType::Record),
        "minItems" => "must contain at least 1 items".to_string(),
        "minLength" => "must not be empty".to_string(),
        "type" => {
            let expected = match segment {
                "" => "array",
                "name" => "string",
                "description" => "string or null",
                "fields" => "array",
                _ => "object",
            };
            format!("must be {expected}")
        }
        _ => return None,
    };
    Some(reason)
}

fn check_unique_names(columns: &Value, path: &str) -> Result<(), SchemaValidationError> {
    let Some(items) = columns.as_array() else {
        return Ok(());
    };

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{path}[{index}]");
        if let Some(name) = item.get("name").and_then(Value::as_str) {
            if let Some(first) = seen.insert(name, index) {
                return Err(SchemaValidationError::new(
                    format!("{item_path}.name"),
                    format!("must be unique, \"{name}\" already defined at {path}[{first}]"),
                ));
            }
        }
        if let Some(fields) = item.get("fields") {
            check_unique_names(fields, &format!("{item_path}.fields"))?;
        }
    }
    Ok(())
}

/// `/1/fields/0/type` → `data[1].fields[0].type`.
fn display_path(pointer: &str) -> String {
    let mut out = ROOT.to_string();
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        if segment.parse::<usize>().is_ok() {
            out.push_str(&format!("[{segment}]"));
        } else {
            out.push('.');
            out.push_str(&segment);
        }
    }
    out
}

fn quoted<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<String> = names.into_iter().map(|n| format!("\"{n}\"")).collect();
    format!("[{}]", names.join(", "))
}

fn braced<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<String> = names.into_iter().map(|n| format!("\"{n}\"")).collect();
    format!("{{{}}}", names.join(", "))
}
