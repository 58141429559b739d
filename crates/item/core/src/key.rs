//! Namespace-qualified identifiers.
//!
//! Item identifiers and persisted attribute keys share the `namespace:key`
//! form. Validation follows the host's resource-location rules so that any
//! key we produce is accepted on the other side of the boundary.

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, ItemError};

/// A `namespace:key` identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    /// Separator between namespace and key.
    pub const SEPARATOR: char = ':';

    /// Creates a key after validating both halves.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let key = key.into();

        validate(&namespace, KeyPart::Namespace)?;
        validate(&key, KeyPart::Key)?;

        Ok(Self { namespace, key })
    }

    /// Parses `ns:key`, or a bare `key` placed in `default_namespace`.
    pub fn parse_with_default(input: &str, default_namespace: &str) -> Result<Self, KeyError> {
        match input.split_once(Self::SEPARATOR) {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Self::new(default_namespace, input),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, Self::SEPARATOR, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, key) = s
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| KeyError::MissingSeparator(s.to_string()))?;
        Self::new(namespace, key)
    }
}

impl TryFrom<String> for NamespacedKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamespacedKey> for String {
    fn from(value: NamespacedKey) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyPart {
    Namespace,
    Key,
}

fn validate(value: &str, part: KeyPart) -> Result<(), KeyError> {
    if value.is_empty() {
        return Err(KeyError::Empty(part.as_str()));
    }

    let allowed = |c: char| match part {
        KeyPart::Namespace => matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'),
        KeyPart::Key => matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-' | '/'),
    };

    match value.chars().find(|c| !allowed(*c)) {
        Some(invalid) => Err(KeyError::InvalidCharacter {
            part: part.as_str(),
            value: value.to_string(),
            invalid,
        }),
        None => Ok(()),
    }
}

impl KeyPart {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Key => "key",
        }
    }
}

/// Errors produced while building a [`NamespacedKey`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid character {invalid:?} in {part} {value:?}")]
    InvalidCharacter {
        part: &'static str,
        value: String,
        invalid: char,
    },

    #[error("expected `namespace:key`, got {0:?}")]
    MissingSeparator(String),
}

impl ItemError for KeyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty(_) => "KEY_EMPTY",
            Self::InvalidCharacter { .. } => "KEY_INVALID_CHARACTER",
            Self::MissingSeparator(_) => "KEY_MISSING_SEPARATOR",
        }
    }
}
