//! Fail-fast gates run before either conversion starts.

mod columns;
mod document;

pub use columns::validate_column_list;
pub use document::validate_schema_document;
