use crate::builder::EntityBuilder;
use crate::config::ConvertConfig;
use crate::document::{DictionaryDocument, DocumentHeader};
use crate::error::Result;
use crate::models::ConversionReport;
use crate::namespace::NamespaceResolver;
use crate::prune::prune_dangling_references;
use crate::registry::EntityRegistry;
use crate::row::OntologyRow;

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: DictionaryDocument,
    pub report: ConversionReport,
}

/// Turns ontology rows into a dictionary document. Each call works on its own
/// registry, so one converter can serve any number of conversions.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    resolver: NamespaceResolver,
}

impl Converter {
    #[must_use]
    pub fn new(config: ConvertConfig) -> Self {
        let resolver = config.namespace.resolver();
        Self { config, resolver }
    }

    #[must_use]
    pub const fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn convert(&self, rows: &[OntologyRow], header: &DocumentHeader) -> Result<Conversion> {
        let dictionary_code = header.dictionary_code()?;
        let builder = EntityBuilder::new(
            &self.resolver,
            self.config.class_code,
            self.config.property_code,
            dictionary_code,
        );

        let mut registry = EntityRegistry::new();
        let mut property_links = 0usize;
        let mut relations = 0usize;
        for (idx, row) in rows.iter().enumerate() {
            let effect = builder.apply_row(&mut registry, idx + 1, row)?;
            property_links += usize::from(effect.link_added);
            relations += usize::from(effect.relation_added);
        }

        let (mut classes, properties) = registry.into_tables();
        let pruned = prune_dangling_references(&mut classes, &properties);
        self.config.reference_policy.enforce(&pruned)?;

        let report = ConversionReport {
            rows: rows.len(),
            classes: classes.len(),
            properties: properties.len(),
            property_links,
            relations,
            class_code_strategy: self.config.class_code,
            property_code_strategy: self.config.property_code,
            pruned,
        };
        Ok(Conversion {
            document: DictionaryDocument {
                header: header.clone(),
                classes,
                properties,
            },
            report,
        })
    }
}
