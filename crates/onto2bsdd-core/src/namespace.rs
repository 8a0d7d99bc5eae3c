use crate::identifier::local_name;
use crate::models::RelationEntity;

/// Decides URI ownership against the target registry's namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceResolver {
    registry_prefix: String,
    external_prefix: String,
}

impl NamespaceResolver {
    pub fn new(registry_prefix: impl Into<String>, external_prefix: impl Into<String>) -> Self {
        Self {
            registry_prefix: registry_prefix.into(),
            external_prefix: external_prefix.into(),
        }
    }

    #[must_use]
    pub fn is_own_namespace(&self, uri: &str) -> bool {
        !self.registry_prefix.is_empty() && uri.starts_with(&self.registry_prefix)
    }

    #[must_use]
    pub fn is_external_schema(&self, uri: &str) -> bool {
        !self.external_prefix.is_empty() && uri.starts_with(&self.external_prefix)
    }

    /// Joins `[base_uri, tag, uri-without-prefix]` with `/` and collapses
    /// repeated slashes, keeping the `://` of the base scheme.
    #[must_use]
    pub fn combine_uri(&self, uri: &str, base_uri: &str, tag: &str) -> String {
        let cleaned = if self.is_own_namespace(uri) {
            &uri[self.registry_prefix.len()..]
        } else {
            strip_scheme(uri)
        };
        let joined = [base_uri, tag, cleaned].join("/");
        collapse_slashes(&joined)
    }

    /// Local names of relations pointing into the external schema, in relation order.
    #[must_use]
    pub fn external_local_names(&self, relations: &[RelationEntity]) -> Vec<String> {
        relations
            .iter()
            .filter(|relation| self.is_external_schema(&relation.related_class_uri))
            .filter_map(|relation| local_name(&relation.related_class_uri))
            .map(ToString::to_string)
            .collect()
    }
}

fn strip_scheme(uri: &str) -> &str {
    match uri.find("://") {
        Some(idx) if uri[..idx].chars().all(is_scheme_char) && idx > 0 => &uri[idx + 3..],
        _ => uri,
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

fn collapse_slashes(raw: &str) -> String {
    let (scheme, rest) = match raw.find(":/") {
        Some(idx) if raw[..idx].chars().all(is_scheme_char) && idx > 0 => {
            (Some(&raw[..idx]), &raw[idx + 1..])
        }
        _ => (None, raw),
    };

    let mut collapsed = String::with_capacity(rest.len());
    for c in rest.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }

    match scheme {
        Some(scheme) => format!("{scheme}:/{collapsed}"),
        None => collapsed,
    }
}
