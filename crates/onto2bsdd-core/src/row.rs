use serde::{Deserialize, Serialize};

pub const COL_CLASS_PREF_LABEL: &str = "ontoClassPrefLabel";
pub const COL_CLASS_URI: &str = "ontoClassURI";
pub const COL_CLASS_DEFINITION: &str = "ontoClassDefinition";
pub const COL_PARENT_CLASS_PREF_LABEL: &str = "ontoParentClassPrefLabel";
pub const COL_PARENT_CLASS: &str = "ontoParentClass";
pub const COL_PROPERTY_URI: &str = "ontoPropertyURI";
pub const COL_PROPERTY_PREF_LABEL: &str = "ontoPropertyPrefLabel";
pub const COL_PROPERTY_DEFINITION: &str = "ontoPropertyDefinition";
pub const COL_PROPERTY_DATATYPE_LABEL: &str = "ontoPropertyDatatypeLabel";
pub const COL_MAPPED_CLASS_RELATION: &str = "mappedClassRelation";
pub const COL_MAPPED_CLASS_URI: &str = "mappedClassURI";

/// One ontology mapping record. Every column is optional: a missing or blank
/// cell is `None`, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OntologyRow {
    pub onto_class_pref_label: Option<String>,
    #[serde(rename = "ontoClassURI")]
    pub onto_class_uri: Option<String>,
    pub onto_class_definition: Option<String>,
    pub onto_parent_class_pref_label: Option<String>,
    pub onto_parent_class: Option<String>,
    #[serde(rename = "ontoPropertyURI")]
    pub onto_property_uri: Option<String>,
    pub onto_property_pref_label: Option<String>,
    pub onto_property_definition: Option<String>,
    pub onto_property_datatype_label: Option<String>,
    pub mapped_class_relation: Option<String>,
    #[serde(rename = "mappedClassURI")]
    pub mapped_class_uri: Option<String>,
}

impl OntologyRow {
    /// Builds a row from `(column, value)` pairs. Unknown columns are ignored.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut row = Self::default();
        for (column, value) in fields {
            if let Some(slot) = row.slot_mut(column.as_ref().trim()) {
                *slot = non_blank(value.as_ref());
            }
        }
        row
    }

    fn slot_mut(&mut self, column: &str) -> Option<&mut Option<String>> {
        let slot = match column {
            COL_CLASS_PREF_LABEL => &mut self.onto_class_pref_label,
            COL_CLASS_URI => &mut self.onto_class_uri,
            COL_CLASS_DEFINITION => &mut self.onto_class_definition,
            COL_PARENT_CLASS_PREF_LABEL => &mut self.onto_parent_class_pref_label,
            COL_PARENT_CLASS => &mut self.onto_parent_class,
            COL_PROPERTY_URI => &mut self.onto_property_uri,
            COL_PROPERTY_PREF_LABEL => &mut self.onto_property_pref_label,
            COL_PROPERTY_DEFINITION => &mut self.onto_property_definition,
            COL_PROPERTY_DATATYPE_LABEL => &mut self.onto_property_datatype_label,
            COL_MAPPED_CLASS_RELATION => &mut self.mapped_class_relation,
            COL_MAPPED_CLASS_URI => &mut self.mapped_class_uri,
            _ => return None,
        };
        Some(slot)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn class_uri(&self) -> Option<&str> {
        self.onto_class_uri.as_deref()
    }

    #[must_use]
    pub fn property_uri(&self) -> Option<&str> {
        self.onto_property_uri.as_deref()
    }

    /// Relation type and related class URI, only when both are present.
    #[must_use]
    pub fn relation(&self) -> Option<(&str, &str)> {
        Some((
            self.mapped_class_relation.as_deref()?,
            self.mapped_class_uri.as_deref()?,
        ))
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_ignores_unknown_columns_and_blank_cells() {
        let row = OntologyRow::from_fields([
            ("ontoClassURI", "http://ex.org/Wall"),
            ("ontoClassPrefLabel", "  Wall "),
            ("ontoClassDefinition", "   "),
            ("ifcClassLabel", "IfcWall"),
        ]);
        assert_eq!(row.class_uri(), Some("http://ex.org/Wall"));
        assert_eq!(row.onto_class_pref_label.as_deref(), Some("Wall"));
        assert_eq!(row.onto_class_definition, None);
        assert_eq!(row.property_uri(), None);
    }

    #[test]
    fn relation_requires_type_and_target() {
        let partial = OntologyRow::from_fields([("mappedClassRelation", "IsEqualTo")]);
        assert_eq!(partial.relation(), None);

        let full = OntologyRow::from_fields([
            ("mappedClassRelation", "IsEqualTo"),
            ("mappedClassURI", "http://ex.org/Other"),
        ]);
        assert_eq!(full.relation(), Some(("IsEqualTo", "http://ex.org/Other")));
    }

    #[test]
    fn deserializes_from_column_named_json() {
        let row: OntologyRow = serde_json::from_str(
            r#"{"ontoClassURI":"http://ex.org/Wall","ontoPropertyDatatypeLabel":"gYear"}"#,
        )
        .expect("parse row");
        assert_eq!(row.class_uri(), Some("http://ex.org/Wall"));
        assert_eq!(row.onto_property_datatype_label.as_deref(), Some("gYear"));
        assert!(!row.is_empty());
        assert!(OntologyRow::default().is_empty());
    }
}
