use crate::attribute::ValueParseError;
use crate::color::ParseError;
use crate::error::{ErrorSeverity, ItemError};
use crate::key::KeyError;

use super::RecipeError;

/// Rejected mutation or construction of an [`ItemDefinition`](super::ItemDefinition).
///
/// Every variant is returned before any field is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("lore line {index} does not exist (lore has {len} lines)")]
    LoreIndexOutOfRange { index: usize, len: usize },

    #[error("attribute key {0:?} is reserved for the identity marker")]
    ReservedAttribute(String),

    #[error("invalid item kind {0:?}: expected lowercase [a-z0-9_]")]
    InvalidKind(String),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Color(#[from] ParseError),

    #[error(transparent)]
    Value(#[from] ValueParseError),

    #[error(transparent)]
    Recipe(#[from] RecipeError),
}

impl ItemError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Color(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LoreIndexOutOfRange { .. } => "DEFINITION_LORE_INDEX_OUT_OF_RANGE",
            Self::ReservedAttribute(_) => "DEFINITION_RESERVED_ATTRIBUTE",
            Self::InvalidKind(_) => "DEFINITION_INVALID_KIND",
            Self::Key(err) => err.error_code(),
            Self::Color(err) => err.error_code(),
            Self::Value(err) => err.error_code(),
            Self::Recipe(err) => err.error_code(),
        }
    }
}
