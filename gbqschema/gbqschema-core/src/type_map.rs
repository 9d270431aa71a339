//! Mapping between [`ColumnType`] and JSON Schema type descriptors.
//!
//! The forward direction is total: every column type has exactly one
//! fragment. The inverse collapses aliases, so it returns one name per
//! fragment chosen by [`AliasPolicy`].

use crate::{ColumnType, JsonType, ObjectDef, PropertyType};

/// `pattern` emitted for `DATETIME` columns (no timezone, optional `T`).
pub const DATETIME_PATTERN: &str = "^[0-9]{4}-((|0)[1-9]|1[0-2])-((|[0-2])[1-9]|3[0-1])(|T)((|[0-1])[0-9]|2[0-3]):((|[0-5])[0-9]):((|[0-5])[0-9])(|.[0-9]{1,6})$";

/// `pattern` recognised as a `TIME` column when no `format` says otherwise.
pub const TIME_PATTERN: &str =
    "^((|[0-1])[0-9]|2[0-3]):((|[0-5])[0-9]):((|[0-5])[0-9])(|.[0-9]{1,6})$";

pub const FORMAT_DATE: &str = "date";
pub const FORMAT_DATE_TIME: &str = "date-time";
pub const FORMAT_TIME: &str = "time";

/// `{type, format?, pattern?}` descriptor produced for a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFragment {
    pub json_type: JsonType,
    pub format: Option<&'static str>,
    pub pattern: Option<&'static str>,
}

impl SchemaFragment {
    const fn of(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
            pattern: None,
        }
    }

    const fn string_format(format: &'static str) -> Self {
        Self {
            json_type: JsonType::String,
            format: Some(format),
            pattern: None,
        }
    }

    const fn string_pattern(pattern: &'static str) -> Self {
        Self {
            json_type: JsonType::String,
            format: None,
            pattern: Some(pattern),
        }
    }
}

impl From<SchemaFragment> for PropertyType {
    /// An object fragment becomes an object with no properties; callers
    /// building records fill it in themselves.
    fn from(fragment: SchemaFragment) -> Self {
        match fragment.json_type {
            JsonType::Integer => PropertyType::Integer,
            JsonType::Number => PropertyType::Number,
            JsonType::Boolean => PropertyType::Boolean,
            JsonType::String => PropertyType::String {
                format: fragment.format.map(str::to_string),
                pattern: fragment.pattern.map(str::to_string),
            },
            JsonType::Object => PropertyType::Object(ObjectDef::default()),
        }
    }
}

/// Returns the JSON Schema fragment for a column type.
///
/// `TIME` is written as `format: time`, not as [`TIME_PATTERN`]; consumers
/// expecting the pattern form should match on the format instead.
pub fn schema_fragment(column_type: ColumnType) -> SchemaFragment {
    match column_type {
        ColumnType::Int | ColumnType::Integer | ColumnType::Int64 => {
            SchemaFragment::of(JsonType::Integer)
        }
        ColumnType::Float | ColumnType::Float64 | ColumnType::Numeric => {
            SchemaFragment::of(JsonType::Number)
        }
        ColumnType::Bool | ColumnType::Boolean => SchemaFragment::of(JsonType::Boolean),
        ColumnType::String | ColumnType::Bytes => SchemaFragment::of(JsonType::String),
        ColumnType::Date => SchemaFragment::string_format(FORMAT_DATE),
        ColumnType::Datetime => SchemaFragment::string_pattern(DATETIME_PATTERN),
        ColumnType::Time => SchemaFragment::string_format(FORMAT_TIME),
        ColumnType::Timestamp => SchemaFragment::string_format(FORMAT_DATE_TIME),
        ColumnType::Record => SchemaFragment::of(JsonType::Object),
    }
}

/// Which alias the inverse mapping emits for numeric JSON types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AliasPolicy {
    /// `integer` → `INTEGER`, `number` → `NUMERIC`.
    #[default]
    Canonical,
    /// `integer` → `INT64`, `number` → `FLOAT64`, matching GoogleSQL naming.
    Preserve64Bit,
}

/// Returns the column type for a property type descriptor.
///
/// String rules are checked in order: a known `format` wins, then a known
/// `pattern`; anything else (including unknown formats) is `STRING`.
pub fn column_type_for(property_type: &PropertyType, policy: AliasPolicy) -> ColumnType {
    match property_type {
        PropertyType::Integer => match policy {
            AliasPolicy::Canonical => ColumnType::Integer,
            AliasPolicy::Preserve64Bit => ColumnType::Int64,
        },
        PropertyType::Number => match policy {
            AliasPolicy::Canonical => ColumnType::Numeric,
            AliasPolicy::Preserve64Bit => ColumnType::Float64,
        },
        PropertyType::Boolean => ColumnType::Boolean,
        PropertyType::String { format, pattern } => {
            match (format.as_deref(), pattern.as_deref()) {
                (Some(FORMAT_DATE), _) => ColumnType::Date,
                (Some(FORMAT_DATE_TIME), _) => ColumnType::Timestamp,
                (Some(FORMAT_TIME), _) | (_, Some(TIME_PATTERN)) => ColumnType::Time,
                (_, Some(DATETIME_PATTERN)) => ColumnType::Datetime,
                _ => ColumnType::String,
            }
        }
        PropertyType::Object(_) => ColumnType::Record,
    }
}
