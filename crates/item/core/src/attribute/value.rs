//! Typed scalar values held by an [`AttributeStore`](super::AttributeStore).

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, ItemError};

/// A single typed scalar.
///
/// Exactly one variant is active per stored value. `Bool` survives in memory;
/// the persisted encoder collapses it into `Byte(0 | 1)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Bool(bool),
    Byte(i8),
    Int(i32),
    Float(f32),
    Double(f64),
    Str(String),
}

impl AttributeValue {
    /// Short lowercase name of the active variant.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Str(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Marker semantics: `Bool(true)` or any non-zero `Byte`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Byte(value) => *value != 0,
            _ => false,
        }
    }
}

impl fmt::Display for AttributeValue {
    /// Formats the value in the same literal syntax [`FromStr`] accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Byte(value) => write!(f, "{value}b"),
            Self::Int(value) => write!(f, "{value}i"),
            Self::Float(value) => write!(f, "{value}f"),
            Self::Double(value) => write!(f, "{value}d"),
            Self::Str(value) => write!(f, "'{value}'"),
        }
    }
}

impl FromStr for AttributeValue {
    type Err = ValueParseError;

    /// Parses a typed literal.
    ///
    /// | Literal        | Value            |
    /// |----------------|------------------|
    /// | `true`/`false` | `Bool`           |
    /// | `5b`           | `Byte(5)`        |
    /// | `5i`           | `Int(5)`         |
    /// | `1.5f`         | `Float(1.5)`     |
    /// | `1.5d`         | `Double(1.5)`    |
    /// | `'text'`       | `Str("text")`    |
    /// | `1.5`          | `Double(1.5)`    |
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let invalid = || ValueParseError::Invalid(s.to_string());

        if literal.eq_ignore_ascii_case("true") {
            return Ok(Self::Bool(true));
        }
        if literal.eq_ignore_ascii_case("false") {
            return Ok(Self::Bool(false));
        }
        if literal.len() >= 2 && literal.starts_with('\'') && literal.ends_with('\'') {
            return Ok(Self::Str(literal[1..literal.len() - 1].to_string()));
        }

        if let Some(number) = literal.strip_suffix('b') {
            return number.parse().map(Self::Byte).map_err(|_| invalid());
        }
        if let Some(number) = literal.strip_suffix('i') {
            return number.parse().map(Self::Int).map_err(|_| invalid());
        }
        if let Some(number) = literal.strip_suffix('f') {
            return number.parse().map(Self::Float).map_err(|_| invalid());
        }
        if let Some(number) = literal.strip_suffix('d') {
            return number.parse().map(Self::Double).map_err(|_| invalid());
        }

        literal.parse().map(Self::Double).map_err(|_| invalid())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i8> for AttributeValue {
    fn from(value: i8) -> Self {
        Self::Byte(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Raised when a typed literal cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueParseError {
    #[error("invalid value literal: {0:?}")]
    Invalid(String),
}

impl ItemError for ValueParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "VALUE_INVALID_LITERAL"
    }
}
