//! JSON Schema side of the data model.

use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use serde_json::{Map, Value, json};

use crate::ParseEnumError;

/// `$schema` URI written into every generated document.
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Key under `definitions` that holds the row object of a generated document.
pub const ELEMENT_DEFINITION: &str = "element";

/// The closed set of JSON Schema `type` names this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Integer,
    Number,
    Boolean,
    String,
    Object,
}

impl JsonType {
    pub const ALL: [JsonType; 5] = [
        JsonType::Integer,
        JsonType::Number,
        JsonType::Boolean,
        JsonType::String,
        JsonType::Object,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::Boolean => "boolean",
            JsonType::String => "string",
            JsonType::Object => "object",
        }
    }
}

impl FromStr for JsonType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        JsonType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("JSON type", s))
    }
}

impl Display for JsonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Type descriptor of a single property.
///
/// Variant names mirror [`JsonType`]; only strings carry `format`/`pattern`
/// and only objects carry nested properties.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
    Integer,
    Number,
    Boolean,
    String {
        format: Option<String>,
        pattern: Option<String>,
    },
    Object(ObjectDef),
}

impl PropertyType {
    pub fn json_type(&self) -> JsonType {
        match self {
            PropertyType::Integer => JsonType::Integer,
            PropertyType::Number => JsonType::Number,
            PropertyType::Boolean => JsonType::Boolean,
            PropertyType::String { .. } => JsonType::String,
            PropertyType::Object(_) => JsonType::Object,
        }
    }

    pub fn string() -> Self {
        PropertyType::String {
            format: None,
            pattern: None,
        }
    }

    pub fn string_with_format(format: impl Into<String>) -> Self {
        PropertyType::String {
            format: Some(format.into()),
            pattern: None,
        }
    }

    pub fn string_with_pattern(pattern: impl Into<String>) -> Self {
        PropertyType::String {
            format: None,
            pattern: Some(pattern.into()),
        }
    }
}

/// A named property of an [`ObjectDef`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    pub name: String,
    pub property_type: PropertyType,
    pub description: Option<String>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Renders the type descriptor (the value stored under the property name).
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        match &self.property_type {
            PropertyType::Object(object) => {
                object.write_entries(self.description.as_deref(), &mut out);
            }
            scalar => {
                out.insert("type".into(), scalar.json_type().as_str().into());
                if let PropertyType::String { format, pattern } = scalar {
                    if let Some(format) = format {
                        out.insert("format".into(), format.as_str().into());
                    }
                    if let Some(pattern) = pattern {
                        out.insert("pattern".into(), pattern.as_str().into());
                    }
                }
                if let Some(description) = &self.description {
                    out.insert("description".into(), description.as_str().into());
                }
            }
        }
        Value::Object(out)
    }
}

/// An object node: ordered properties plus the names listed in `required`.
///
/// Requiredness lives on the object, not on the property; a property is
/// required iff its name appears in [`ObjectDef::required`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectDef {
    pub properties: Vec<PropertyDef>,
    pub required: Vec<String>,
    pub additional_properties: Option<bool>,
}

impl ObjectDef {
    pub fn new(additional_properties: Option<bool>) -> Self {
        Self {
            additional_properties,
            ..Self::default()
        }
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Adds a property, replacing an existing one with the same name in place.
    pub fn insert(&mut self, property: PropertyDef, required: bool) {
        let name = property.name.clone();
        match self.properties.iter_mut().find(|p| p.name == name) {
            Some(slot) => *slot = property,
            None => self.properties.push(property),
        }
        let listed = self.is_required(&name);
        if required && !listed {
            self.required.push(name);
        } else if !required && listed {
            self.required.retain(|r| *r != name);
        }
    }

    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        self.write_entries(None, &mut out);
        Value::Object(out)
    }

    fn write_entries(&self, description: Option<&str>, out: &mut Map<String, Value>) {
        out.insert("type".into(), JsonType::Object.as_str().into());
        if let Some(description) = description {
            out.insert("description".into(), description.into());
        }
        let properties: Map<String, Value> = self
            .properties
            .iter()
            .map(|p| (p.name.clone(), p.to_value()))
            .collect();
        out.insert("properties".into(), Value::Object(properties));
        if let Some(additional) = self.additional_properties {
            out.insert("additionalProperties".into(), additional.into());
        }
        out.insert("required".into(), self.required.clone().into());
    }
}

/// Top-level document: an array whose items reference `#/definitions/element`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub element: ObjectDef,
}

impl SchemaDocument {
    pub fn new(element: ObjectDef) -> Self {
        Self { element }
    }

    pub fn to_value(&self) -> Value {
        json!({
            "$schema": DRAFT_07,
            "type": "array",
            "items": { "$ref": format!("#/definitions/{ELEMENT_DEFINITION}") },
            "definitions": { ELEMENT_DEFINITION: self.element.to_value() },
        })
    }
}
