use crate::error::{OntoError, Result};
use crate::identifier::{IdentifierStrategy, link_code, local_name};
use crate::models::{
    ClassEntity, DataType, PropertyEntity, PropertyLinkEntity, PropertyType, RelationEntity,
};
use crate::namespace::NamespaceResolver;
use crate::registry::EntityRegistry;
use crate::row::{COL_CLASS_URI, COL_PROPERTY_PREF_LABEL, OntologyRow};

const LINK_URI_TAG: &str = "prop";
const RELATION_URI_TAG: &str = "relation";

/// What one row added to its class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowEffect {
    pub link_added: bool,
    pub relation_added: bool,
}

/// Resolves a row's entities through the registry and attaches its property
/// link and relation to the row's class.
#[derive(Debug, Clone)]
pub struct EntityBuilder<'a> {
    resolver: &'a NamespaceResolver,
    class_code: IdentifierStrategy,
    property_code: IdentifierStrategy,
    property_set: &'a str,
}

impl<'a> EntityBuilder<'a> {
    #[must_use]
    pub const fn new(
        resolver: &'a NamespaceResolver,
        class_code: IdentifierStrategy,
        property_code: IdentifierStrategy,
        property_set: &'a str,
    ) -> Self {
        Self {
            resolver,
            class_code,
            property_code,
            property_set,
        }
    }

    /// `row_number` is 1-based and only used in error messages.
    pub fn apply_row(
        &self,
        registry: &mut EntityRegistry,
        row_number: usize,
        row: &OntologyRow,
    ) -> Result<RowEffect> {
        self.apply(registry, row).map_err(at_row(row_number))
    }

    fn apply(&self, registry: &mut EntityRegistry, row: &OntologyRow) -> Result<RowEffect> {
        let Some(class_uri) = row.class_uri() else {
            return Err(OntoError::InvalidArgument(format!("{COL_CLASS_URI} is missing")));
        };

        let property = match row.property_uri() {
            Some(property_uri) => Some(self.resolve_property(registry, row, property_uri)?),
            None => None,
        };

        let class = registry.class_or_insert_with(class_uri, || self.new_class(row, class_uri))?;

        let mut effect = RowEffect::default();
        if let Some((property_code, property_uri)) = property {
            let link = self.property_link(class, &property_code, &property_uri);
            class.class_properties.push(link);
            effect.link_added = true;
        }

        if let Some((relation_type, related_uri)) = row.relation() {
            let owned_uri = self.owned_uri(related_uri, &class.owned_uri, RELATION_URI_TAG);
            let relation = RelationEntity::new(relation_type, related_uri, Some(owned_uri));
            class.class_relations.push(relation);
            effect.relation_added = true;
        }

        class.related_ifc_entity_names_list =
            self.resolver.external_local_names(&class.class_relations);
        Ok(effect)
    }

    /// Returns the code and owned URI of the row's property entity.
    fn resolve_property(
        &self,
        registry: &mut EntityRegistry,
        row: &OntologyRow,
        property_uri: &str,
    ) -> Result<(String, String)> {
        let label = row.onto_property_pref_label.as_deref();
        let identity = match (self.property_code, label) {
            (IdentifierStrategy::UriLocalName, _) => property_uri,
            (IdentifierStrategy::Label, Some(label)) => label,
            (IdentifierStrategy::Label, None) => {
                return Err(OntoError::InvalidArgument(format!(
                    "{COL_PROPERTY_PREF_LABEL} is missing for {property_uri}"
                )));
            }
        };
        let new_property = || self.new_property(row, property_uri);
        let property = registry.property_or_insert_with(identity, new_property)?;
        Ok((property.code.clone(), property.owned_uri.clone()))
    }

    fn new_class(&self, row: &OntologyRow, class_uri: &str) -> Result<ClassEntity> {
        let label = row.onto_class_pref_label.as_deref();
        let code = self.class_code.mint(Some(class_uri), label)?;
        let mut class = ClassEntity::new(code, class_uri);
        class.name = row.onto_class_pref_label.clone();
        class.definition = row.onto_class_definition.clone();

        let parent_uri = row.onto_parent_class.as_deref();
        let parent_label = row.onto_parent_class_pref_label.as_deref();
        class.parent_class_code = self.class_code.mint_reference(parent_uri, parent_label);
        Ok(class)
    }

    fn new_property(&self, row: &OntologyRow, property_uri: &str) -> Result<PropertyEntity> {
        let label = row.onto_property_pref_label.as_deref();
        Ok(PropertyEntity {
            code: self.property_code.mint(Some(property_uri), label)?,
            data_type: DataType::from_label(row.onto_property_datatype_label.as_deref()),
            definition: row.onto_property_definition.clone(),
            name: row.onto_property_pref_label.clone(),
            owned_uri: property_uri.to_string(),
            uid: local_name(property_uri).map(ToString::to_string),
        })
    }

    fn property_link(
        &self,
        class: &ClassEntity,
        property_code: &str,
        property_uri: &str,
    ) -> PropertyLinkEntity {
        PropertyLinkEntity {
            code: link_code(&class.code, property_code),
            owned_uri: Some(self.owned_uri(property_uri, &class.owned_uri, LINK_URI_TAG)),
            property_code: Some(property_code.to_string()),
            property_set: self.property_set.to_string(),
            property_type: PropertyType::Property,
        }
    }

    /// Targets inside the registry namespace get a URI under the class; any
    /// other target is its own owned URI.
    fn owned_uri(&self, target: &str, class_uri: &str, tag: &str) -> String {
        let resolver = self.resolver;
        if resolver.is_own_namespace(target) {
            resolver.combine_uri(target, class_uri, tag)
        } else {
            target.to_string()
        }
    }
}

fn at_row(row_number: usize) -> impl Fn(OntoError) -> OntoError {
    move |err| match err {
        OntoError::InvalidArgument(message) => {
            OntoError::InvalidArgument(format!("row {row_number}: {message}"))
        }
        other => other,
    }
}
