//! Conversion between BigQuery column lists and JSON Schema documents.
//!
//! Both directions validate their input before walking it and either return a
//! complete result or an error; nothing is partially converted.
//!
//! - [`column_list_to_json_schema`] checks the list with
//!   [`validate_column_list`] and emits a draft-07 document whose row object
//!   lives at `#/definitions/element`.
//! - [`json_schema_to_column_list`] checks the document with
//!   [`validate_schema_document`] and emits the column list, recursing into
//!   object-typed properties as `RECORD` columns.
//!
//! # Typical Flow
//! ```rust
//! use gbqschema_jsonschema::{column_list_to_json_schema, json_schema_to_column_list};
//! use serde_json::json;
//!
//! let columns = json!([{"name": "id", "type": "INTEGER", "mode": "REQUIRED"}]);
//! let document = column_list_to_json_schema(&columns, false).unwrap();
//! assert_eq!(document["definitions"]["element"]["required"], json!(["id"]));
//!
//! let back = json_schema_to_column_list(&document).unwrap();
//! assert_eq!(back, columns);
//! ```
pub mod error;
pub mod from_json_schema;
pub mod to_json_schema;
pub mod validate;

pub use error::{ConvertError, SchemaCompileError, SchemaValidationError};
pub use from_json_schema::{
    json_schema_to_column_list, json_schema_to_column_list_with_policy, json_schema_to_columns,
    json_schema_to_columns_with_policy, object_def_to_columns,
};
pub use to_json_schema::{
    column_list_to_json_schema, columns_to_object_def, columns_to_schema_document,
};
pub use validate::{validate_column_list, validate_schema_document};

/// Re-export of the data model crate.
pub use gbqschema_core as core;
