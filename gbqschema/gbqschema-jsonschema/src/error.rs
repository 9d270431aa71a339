//! Error types for validation and conversion.

/// The column list does not satisfy the structural column-list contract.
///
/// `path` addresses the offending value in `data[1].fields[0].type` form and
/// `reason` is phrased like a JSON Schema validator message
/// (`must be one of [...]`, `must not contain {...} properties`, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path} {reason}")]
pub struct SchemaValidationError {
    pub path: String,
    pub reason: String,
}

impl SchemaValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// The input document is not a well-formed JSON Schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid JSON Schema document at '{path}': {message}")]
pub struct SchemaCompileError {
    /// JSON pointer into the document, prefixed with `#`.
    pub path: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("column list validation failed: {0}")]
    Validation(#[from] SchemaValidationError),

    #[error(transparent)]
    Compile(#[from] SchemaCompileError),

    /// A property's `type` is missing or outside `integer|number|boolean|string|object`.
    #[error("unsupported type {found} at '{path}'")]
    UnsupportedType { path: String, found: String },

    /// The document compiled but its shape cannot be turned into columns.
    #[error("malformed schema at '{path}': {detail}")]
    Malformed { path: String, detail: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn malformed(path: impl Into<String>, detail: impl Into<String>) -> Self {
        ConvertError::Malformed {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
