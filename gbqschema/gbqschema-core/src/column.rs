use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::ParseEnumError;

/// BigQuery column type names accepted in a column list.
///
/// Several names are aliases of one another (`INT`/`INTEGER`/`INT64`,
/// `FLOAT`/`FLOAT64`/`NUMERIC`, `BOOL`/`BOOLEAN`); they are kept distinct here
/// so that a parsed list serializes back with the spelling it came in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Int,
    Integer,
    Int64,
    Float,
    Float64,
    Numeric,
    Bool,
    Boolean,
    String,
    Bytes,
    Date,
    Datetime,
    Time,
    Timestamp,
    Record,
}

impl ColumnType {
    /// Every accepted type, in the order the column-list schema enumerates them.
    pub const ALL: [ColumnType; 15] = [
        ColumnType::Int,
        ColumnType::Integer,
        ColumnType::Int64,
        ColumnType::Float,
        ColumnType::Float64,
        ColumnType::Numeric,
        ColumnType::Bool,
        ColumnType::Boolean,
        ColumnType::String,
        ColumnType::Bytes,
        ColumnType::Date,
        ColumnType::Datetime,
        ColumnType::Time,
        ColumnType::Timestamp,
        ColumnType::Record,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "INT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Int64 => "INT64",
            ColumnType::Float => "FLOAT",
            ColumnType::Float64 => "FLOAT64",
            ColumnType::Numeric => "NUMERIC",
            ColumnType::Bool => "BOOL",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::String => "STRING",
            ColumnType::Bytes => "BYTES",
            ColumnType::Date => "DATE",
            ColumnType::Datetime => "DATETIME",
            ColumnType::Time => "TIME",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Record => "RECORD",
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, ColumnType::Record)
    }
}

impl FromStr for ColumnType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("column type", s))
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Column nullability. A missing or `null` mode reads as [`Mode::Nullable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Required,
    #[default]
    Nullable,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Required, Mode::Nullable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Required => "REQUIRED",
            Mode::Nullable => "NULLABLE",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Mode::Required)
    }
}

impl FromStr for Mode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("mode", s))
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a BigQuery column list.
///
/// Serializes to `{description?, name, type, mode, fields?}`; `fields` is
/// written only when non-empty, which in a well-formed list means only for
/// [`ColumnType::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Columns::is_empty")]
    pub fields: Columns,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType, mode: Mode) -> Self {
        Self {
            description: None,
            name: name.into(),
            column_type,
            mode,
            fields: Columns::default(),
        }
    }

    pub fn record(name: impl Into<String>, mode: Mode, fields: impl Into<Columns>) -> Self {
        Self {
            fields: fields.into(),
            ..Self::new(name, ColumnType::Record, mode)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered column list, used both for a table body and for record members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(pub Vec<Column>);

impl Columns {
    pub fn new(columns: Vec<Column>) -> Self {
        Self(columns)
    }

    pub fn as_slice(&self) -> &[Column] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.0.iter()
    }
}

impl From<Vec<Column>> for Columns {
    fn from(value: Vec<Column>) -> Self {
        Self(value)
    }
}

impl From<Columns> for Vec<Column> {
    fn from(value: Columns) -> Self {
        value.0
    }
}

impl FromIterator<Column> for Columns {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Columns {
    type Item = Column;
    type IntoIter = std::vec::IntoIter<Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl AsRef<[Column]> for Columns {
    fn as_ref(&self) -> &[Column] {
        self.as_slice()
    }
}

impl Deref for Columns {
    type Target = [Column];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
