use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{OntoError, Result};
use crate::models::{ClassEntity, PropertyEntity};

pub const DICTIONARY_CODE_FIELD: &str = "DictionaryCode";
pub const CLASSES_FIELD: &str = "Classes";
pub const PROPERTIES_FIELD: &str = "Properties";

/// Caller-supplied document header. Fields are passed through untouched and
/// shallow-merged into the emitted document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentHeader {
    fields: Map<String, Value>,
}

impl DocumentHeader {
    pub fn new(dictionary_code: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(
            DICTIONARY_CODE_FIELD.to_string(),
            Value::String(dictionary_code.into()),
        );
        Self { fields }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => {
                let kind = json_kind(&other);
                Err(OntoError::InvalidHeader(format!("header must be a JSON object, got {kind}")))
            }
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The target dictionary code, used as every link's `PropertySet`.
    pub fn dictionary_code(&self) -> Result<&str> {
        self.fields
            .get(DICTIONARY_CODE_FIELD)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                OntoError::InvalidHeader(format!(
                    "{DICTIONARY_CODE_FIELD} must be a non-empty string"
                ))
            })
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryDocument {
    pub header: DocumentHeader,
    pub classes: Vec<ClassEntity>,
    pub properties: Vec<PropertyEntity>,
}

impl DictionaryDocument {
    /// Header fields with `Classes` and `Properties` laid over them.
    pub fn to_value(&self) -> Result<Value> {
        let mut fields = self.header.fields.clone();
        let classes = serde_json::to_value(&self.classes)?;
        let properties = serde_json::to_value(&self.properties)?;
        fields.insert(CLASSES_FIELD.to_string(), classes);
        fields.insert(PROPERTIES_FIELD.to_string(), properties);
        Ok(Value::Object(fields))
    }

    /// Two-space pretty JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.to_value()?)?;
        out.push('\n');
        Ok(out)
    }
}

impl Serialize for DictionaryDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_requires_object_and_dictionary_code() {
        let err = DocumentHeader::from_json_str("[1]").expect_err("array");
        assert_eq!(err.code(), "INVALID_HEADER");

        let header = DocumentHeader::from_json_str(r#"{"DictionaryName":"x"}"#);
        let err = header.expect("header").dictionary_code().expect_err("code");
        assert_eq!(err.code(), "INVALID_HEADER");

        let header = DocumentHeader::from_json_str(r#"{"DictionaryCode":"  "}"#);
        assert!(header.expect("header").dictionary_code().is_err());

        let err = DocumentHeader::from_json_str("{").expect_err("bad json");
        assert_eq!(err.code(), "JSON_ERROR");
    }

    #[test]
    fn document_shallow_merges_header_and_overrides_tables() {
        let header = DocumentHeader::new("demo")
            .with_field("OrganizationCode", "acme")
            .with_field("Classes", Value::String("stale".to_string()));
        let document = DictionaryDocument {
            header,
            classes: vec![ClassEntity::new("Wall", "http://ex.org/Wall")],
            properties: Vec::new(),
        };

        let value = document.to_value().expect("value");
        assert_eq!(value["DictionaryCode"], "demo");
        assert_eq!(value["OrganizationCode"], "acme");
        assert_eq!(value["Classes"][0]["Code"], "Wall");
        assert_eq!(value["Properties"], Value::Array(Vec::new()));
        assert_eq!(serde_json::to_value(&document).expect("serialize"), value);
    }

    #[test]
    fn pretty_json_is_stable() {
        let document = DictionaryDocument {
            header: DocumentHeader::new("demo"),
            classes: vec![ClassEntity::new("Wall", "http://ex.org/Wall")],
            properties: Vec::new(),
        };
        let first = document.to_pretty_json().expect("json");
        let second = document.clone().to_pretty_json().expect("json");
        assert_eq!(first, second);
        assert!(first.ends_with("}\n"));
        assert!(first.contains("\n  \"Classes\": ["));
    }
}
