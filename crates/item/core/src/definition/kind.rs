use core::fmt;
use core::str::FromStr;

use super::DefinitionError;

/// Base material tag of an item, e.g. `diamond_pickaxe`. Fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ItemKind(String);

impl ItemKind {
    pub fn new(kind: impl Into<String>) -> Result<Self, DefinitionError> {
        let kind = kind.into();
        let valid = !kind.is_empty()
            && kind
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'));

        if valid {
            Ok(Self(kind))
        } else {
            Err(DefinitionError::InvalidKind(kind))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemKind {
    type Err = DefinitionError;

    /// Accepts the upper-case material spelling too (`SOUL_LANTERN`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().to_ascii_lowercase())
    }
}

impl TryFrom<String> for ItemKind {
    type Error = DefinitionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemKind> for String {
    fn from(value: ItemKind) -> Self {
        value.0
    }
}
