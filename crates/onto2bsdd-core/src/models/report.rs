use serde::{Deserialize, Serialize};

use crate::identifier::IdentifierStrategy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DanglingReference {
    pub owner_code: String,
    pub missing_code: String,
}

/// References cleared by the final integrity pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PruneReport {
    pub cleared_parent_codes: Vec<DanglingReference>,
    pub cleared_property_codes: Vec<DanglingReference>,
}

impl PruneReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cleared_parent_codes.is_empty() && self.cleared_property_codes.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.cleared_parent_codes.len() + self.cleared_property_codes.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionReport {
    pub rows: usize,
    pub classes: usize,
    pub properties: usize,
    pub property_links: usize,
    pub relations: usize,
    pub class_code_strategy: IdentifierStrategy,
    pub property_code_strategy: IdentifierStrategy,
    pub pruned: PruneReport,
}
