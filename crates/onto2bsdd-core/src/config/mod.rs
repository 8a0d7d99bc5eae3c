use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OntoError, Result};
use crate::identifier::IdentifierStrategy;
use crate::namespace::NamespaceResolver;
use crate::prune::ReferencePolicy;

mod env;

pub use env::{
    ENV_CLASS_CODE, ENV_EXTERNAL_PREFIX, ENV_PROPERTY_CODE, ENV_REFERENCE_POLICY,
    ENV_REGISTRY_PREFIX,
};

pub const DEFAULT_REGISTRY_PREFIX: &str = "https://identifier.buildingsmart.org/uri/";
pub const DEFAULT_EXTERNAL_PREFIX: &str =
    "https://identifier.buildingsmart.org/uri/buildingsmart/ifc/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamespaceConfig {
    pub registry_prefix: String,
    pub external_prefix: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            registry_prefix: DEFAULT_REGISTRY_PREFIX.to_string(),
            external_prefix: DEFAULT_EXTERNAL_PREFIX.to_string(),
        }
    }
}

impl NamespaceConfig {
    #[must_use]
    pub fn resolver(&self) -> NamespaceResolver {
        NamespaceResolver::new(&self.registry_prefix, &self.external_prefix)
    }
}

/// Settings for one conversion: namespaces, the code strategy of each entity
/// kind, and the dangling-reference policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    pub class_code: IdentifierStrategy,
    pub property_code: IdentifierStrategy,
    pub reference_policy: ReferencePolicy,
    pub namespace: NamespaceConfig,
}

impl ConvertConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str::<Self>(raw)?)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Defaults or the given TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_toml_path(path)?,
            None => Self::default(),
        };
        config.with_overrides(env::read_non_empty_env)
    }

    /// Applies overrides from `lookup`, keyed by the `ONTO2BSDD_*` names.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(ENV_REGISTRY_PREFIX) {
            self.namespace.registry_prefix = prefix;
        }
        if let Some(prefix) = lookup(ENV_EXTERNAL_PREFIX) {
            self.namespace.external_prefix = prefix;
        }
        if let Some(raw) = lookup(ENV_CLASS_CODE) {
            self.class_code = raw
                .parse()
                .map_err(|err| in_override(ENV_CLASS_CODE, err))?;
        }
        if let Some(raw) = lookup(ENV_PROPERTY_CODE) {
            self.property_code = raw
                .parse()
                .map_err(|err| in_override(ENV_PROPERTY_CODE, err))?;
        }
        if let Some(raw) = lookup(ENV_REFERENCE_POLICY) {
            self.reference_policy = raw
                .parse()
                .map_err(|err| in_override(ENV_REFERENCE_POLICY, err))?;
        }
        Ok(self)
    }
}

fn in_override(name: &str, err: OntoError) -> OntoError {
    match err {
        OntoError::InvalidConfig(message) => OntoError::InvalidConfig(format!("{name}: {message}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| values.get(name).cloned()
    }

    #[test]
    fn defaults_use_bsdd_namespaces_and_local_names() {
        let config = ConvertConfig::default();
        assert_eq!(config.namespace.registry_prefix, DEFAULT_REGISTRY_PREFIX);
        assert_eq!(config.class_code, IdentifierStrategy::UriLocalName);
        assert_eq!(config.property_code, IdentifierStrategy::UriLocalName);
        assert_eq!(config.reference_policy, ReferencePolicy::Prune);
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = ConvertConfig::from_toml_str(
            r#"
            property_code = "label"

            [namespace]
            registry_prefix = "https://example.org/dict/"
            "#,
        )
        .expect("parse config");
        assert_eq!(config.property_code, IdentifierStrategy::Label);
        assert_eq!(config.class_code, IdentifierStrategy::UriLocalName);
        assert_eq!(
            config.namespace.registry_prefix,
            "https://example.org/dict/"
        );
        assert_eq!(config.namespace.external_prefix, DEFAULT_EXTERNAL_PREFIX);
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        let err = ConvertConfig::from_toml_str("hash_links = true");
        let err = err.expect_err("must fail");
        assert_eq!(err.code(), "TOML_ERROR");
    }

    #[test]
    fn overrides_replace_file_values() {
        let config = ConvertConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_CLASS_CODE, "label"),
                (ENV_REFERENCE_POLICY, "reject"),
                (ENV_EXTERNAL_PREFIX, "https://example.org/ifc/"),
            ]))
            .expect("overrides");
        assert_eq!(config.class_code, IdentifierStrategy::Label);
        assert_eq!(config.property_code, IdentifierStrategy::UriLocalName);
        assert_eq!(config.reference_policy, ReferencePolicy::Reject);
        assert_eq!(
            config.namespace.external_prefix,
            "https://example.org/ifc/"
        );
    }

    #[test]
    fn invalid_override_names_the_variable() {
        let err = ConvertConfig::default()
            .with_overrides(lookup_from(&[(ENV_PROPERTY_CODE, "md5")]))
            .expect_err("must fail");
        assert_eq!(err.code(), "INVALID_CONFIG");
        assert!(err.to_string().contains(ENV_PROPERTY_CODE));
    }

    #[test]
    fn config_file_round_trips_through_toml() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("onto2bsdd.toml");
        let mut config = ConvertConfig::default();
        config.property_code = IdentifierStrategy::Label;
        let raw = toml::to_string(&config).expect("to toml");
        std::fs::write(&path, raw).expect("write");

        let loaded = ConvertConfig::from_toml_path(&path).expect("load");
        assert_eq!(loaded, config);
    }
}
