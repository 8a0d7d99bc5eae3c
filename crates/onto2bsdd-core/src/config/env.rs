pub const ENV_REGISTRY_PREFIX: &str = "ONTO2BSDD_REGISTRY_PREFIX";
pub const ENV_EXTERNAL_PREFIX: &str = "ONTO2BSDD_EXTERNAL_PREFIX";
pub const ENV_CLASS_CODE: &str = "ONTO2BSDD_CLASS_CODE";
pub const ENV_PROPERTY_CODE: &str = "ONTO2BSDD_PROPERTY_CODE";
pub const ENV_REFERENCE_POLICY: &str = "ONTO2BSDD_REFERENCE_POLICY";

#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
