//! Data model and type mapping shared by the `gbqschema` converters.
//!
//! Two tree shapes live here:
//! - the BigQuery side: an ordered [`Columns`] list of [`Column`] definitions,
//! - the JSON Schema side: an [`ObjectDef`] holding [`PropertyDef`] entries and
//!   the `required` set, wrapped by [`SchemaDocument`] for output.
//!
//! [`schema_fragment`] and [`column_type_for`] translate between the two type
//! vocabularies. Neither direction performs I/O or validation; see
//! `gbqschema-jsonschema` for the validating converters.

mod column;
mod error;
mod schema;
mod type_map;

pub use column::{Column, ColumnType, Columns, Mode};
pub use error::ParseEnumError;
pub use schema::{
    DRAFT_07, ELEMENT_DEFINITION, JsonType, ObjectDef, PropertyDef, PropertyType, SchemaDocument,
};
pub use type_map::{
    AliasPolicy, DATETIME_PATTERN, FORMAT_DATE, FORMAT_DATE_TIME, FORMAT_TIME, SchemaFragment,
    TIME_PATTERN, column_type_for, schema_fragment,
};
