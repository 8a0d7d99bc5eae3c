use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OntoError, Result};
use crate::models::{ClassEntity, DanglingReference, PropertyEntity, PruneReport};

/// What to do with references left dangling after all rows are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    #[default]
    Prune,
    Reject,
}

impl ReferencePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prune => "prune",
            Self::Reject => "reject",
        }
    }

    /// `Reject` turns a non-empty prune report into an error.
    pub fn enforce(self, report: &PruneReport) -> Result<()> {
        if self == Self::Prune || report.is_empty() {
            return Ok(());
        }
        let parents = report
            .cleared_parent_codes
            .iter()
            .map(|r| format!("{} -> parent {}", r.owner_code, r.missing_code));
        let properties = report
            .cleared_property_codes
            .iter()
            .map(|r| format!("{} -> property {}", r.owner_code, r.missing_code));
        let message = parents.chain(properties).collect::<Vec<_>>().join(", ");
        Err(OntoError::DanglingReference(message))
    }
}

impl Display for ReferencePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferencePolicy {
    type Err = OntoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "prune" => Ok(Self::Prune),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(OntoError::InvalidConfig(format!("unknown reference policy: {other}"))),
        }
    }
}

/// Clears every `ParentClassCode` and link `PropertyCode` whose target code
/// is not present in the finished tables. Entities themselves are kept.
pub fn prune_dangling_references(
    classes: &mut [ClassEntity],
    properties: &[PropertyEntity],
) -> PruneReport {
    let class_codes = classes
        .iter()
        .map(|class| class.code.clone())
        .collect::<HashSet<_>>();
    let property_codes = properties
        .iter()
        .map(|property| property.code.as_str())
        .collect::<HashSet<_>>();

    let dangling_parent = |code: &mut String| !class_codes.contains(code.as_str());
    let dangling_property = |code: &mut String| !property_codes.contains(code.as_str());

    let mut report = PruneReport::default();
    for class in classes.iter_mut() {
        if let Some(parent) = class.parent_class_code.take_if(&dangling_parent) {
            report.cleared_parent_codes.push(DanglingReference {
                owner_code: class.code.clone(),
                missing_code: parent,
            });
        }
        for link in &mut class.class_properties {
            if let Some(code) = link.property_code.take_if(&dangling_property) {
                report.cleared_property_codes.push(DanglingReference {
                    owner_code: link.code.clone(),
                    missing_code: code,
                });
            }
        }
    }
    report
}
