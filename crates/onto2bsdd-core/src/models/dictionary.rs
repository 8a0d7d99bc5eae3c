use serde::{Deserialize, Serialize};

pub const QUANTITY_VALUE_LABEL: &str = "QuantityValue";
pub const YEAR_LABEL: &str = "gYear";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ClassType {
    #[default]
    Class,
    Material,
    GroupOfProperties,
    AlternativeUse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ClassStatus {
    #[default]
    Preview,
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Property,
    Dependency,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DataType {
    Real,
    Time,
    #[default]
    String,
}

impl DataType {
    /// Case-sensitive match on the source datatype label.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(QUANTITY_VALUE_LABEL) => Self::Real,
            Some(YEAR_LABEL) => Self::Time,
            _ => Self::String,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RelationEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_uri: Option<String>,
    pub related_class_uri: String,
    pub relation_type: String,
}

impl RelationEntity {
    pub fn new(
        relation_type: impl Into<String>,
        related_class_uri: impl Into<String>,
        owned_uri: Option<String>,
    ) -> Self {
        Self {
            owned_uri,
            related_class_uri: related_class_uri.into(),
            relation_type: relation_type.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyLinkEntity {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_code: Option<String>,
    pub property_set: String,
    #[serde(default)]
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ClassEntity {
    #[serde(default)]
    pub class_type: ClassType,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub owned_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_class_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_ifc_entity_names_list: Vec<String>,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_relations: Vec<RelationEntity>,
    #[serde(default)]
    pub class_properties: Vec<PropertyLinkEntity>,
}

impl ClassEntity {
    pub fn new(code: impl Into<String>, owned_uri: impl Into<String>) -> Self {
        Self {
            class_type: ClassType::Class,
            code: code.into(),
            definition: None,
            name: None,
            owned_uri: owned_uri.into(),
            parent_class_code: None,
            related_ifc_entity_names_list: Vec::new(),
            status: ClassStatus::Preview,
            class_relations: Vec::new(),
            class_properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyEntity {
    pub code: String,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub owned_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}
