use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{OntoError, Result};

/// Suffix after the last `#`, or after the last `/` when there is no `#`.
#[must_use]
pub fn local_name(uri: &str) -> Option<&str> {
    let uri = uri.trim();
    if uri.is_empty() {
        return None;
    }
    let tail = match uri.rfind('#') {
        Some(idx) => &uri[idx + 1..],
        None => uri.rsplit('/').next().unwrap_or(uri),
    };
    if tail.is_empty() { None } else { Some(tail) }
}

#[must_use]
pub fn code_from_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| is_code_char(*c))
        .collect()
}

#[must_use]
pub const fn is_code_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.')
        || (matches!(c, '\u{00C0}'..='\u{024F}') && c != '\u{00D7}' && c != '\u{00F7}')
}

/// Stable link identifier: blake3 over `"{class_code}-{property_code}"`, the
/// first 16 digest bytes grouped 8-4-4-4-12.
#[must_use]
pub fn link_code(class_code: &str, property_code: &str) -> String {
    let digest = blake3::hash(format!("{class_code}-{property_code}").as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest.as_bytes()[..16]);
    Uuid::from_bytes(bytes).hyphenated().to_string()
}

/// How an entity kind derives its `Code`. The same strategy must mint an
/// entity's own code and every reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStrategy {
    #[default]
    UriLocalName,
    Label,
}

impl IdentifierStrategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UriLocalName => "uri_local_name",
            Self::Label => "label",
        }
    }

    const fn source_field(self) -> &'static str {
        match self {
            Self::UriLocalName => "uri",
            Self::Label => "label",
        }
    }

    /// The text a code is derived from, present whenever the strategy's source
    /// field is. A URI with an empty suffix yields an empty name.
    fn source<'a>(self, uri: Option<&'a str>, label: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::UriLocalName => uri.map(|uri| local_name(uri).unwrap_or_default()),
            Self::Label => label,
        }
    }

    /// Code for an entity being created. Only an absent source field is an
    /// error; a source that sanitizes to nothing gives an empty code.
    pub fn mint(self, uri: Option<&str>, label: Option<&str>) -> Result<String> {
        let source = self.source(uri, label).ok_or_else(|| {
            OntoError::InvalidArgument(format!(
                "cannot derive code with strategy '{}': {} is missing",
                self.as_str(),
                self.source_field()
            ))
        })?;
        Ok(code_from_name(source))
    }

    /// Code for a reference to another entity; absent source data means no reference.
    #[must_use]
    pub fn mint_reference(self, uri: Option<&str>, label: Option<&str>) -> Option<String> {
        self.source(uri, label).map(code_from_name)
    }
}

impl Display for IdentifierStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierStrategy {
    type Err = OntoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "uri_local_name" | "uri" => Ok(Self::UriLocalName),
            "label" | "name" => Ok(Self::Label),
            other => Err(OntoError::InvalidConfig(format!("unknown identifier strategy: {other}"))),
        }
    }
}
