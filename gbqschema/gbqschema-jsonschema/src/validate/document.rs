use serde_json::Value;

use crate::SchemaCompileError;

/// Confirms `document` compiles as a JSON Schema.
///
/// The dialect is taken from `$schema` when present. Unknown `type` names,
/// non-array `required` lists and similar meta-schema violations are
/// reported here, before any conversion walks the document.
///
/// Only references inside `document` resolve. The crate is built without
/// the file and HTTP retrievers, so a `$ref` to an external URI fails to
/// compile instead of being fetched.
pub fn validate_schema_document(document: &Value) -> Result<(), SchemaCompileError> {
    match jsonschema::validator_for(document) {
        Ok(_) => Ok(()),
        Err(error) => Err(SchemaCompileError {
            path: format!("#{}", error.instance_path),
            message: error.to_string(),
        }),
    }
}
