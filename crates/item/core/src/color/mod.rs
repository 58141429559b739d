//! Hex colors, gradient tokens, and per-character gradient generation.
//!
//! Token grammar (user-facing, typed into configs or commands):
//!
//! ```text
//! solid    := '#' hex{3} | '#' hex{6}
//! gradient := solid '-' solid [ ws* arrow ]
//! arrow    := '>' | '<' | '<>' | '><'
//! ```

mod gradient;
mod rgb;

use core::fmt;
use core::str::FromStr;

pub use gradient::{generate, interpolate, ratio};
pub use rgb::Rgb;

use crate::error::{ErrorSeverity, ItemError};

/// Mapping from character position to interpolation ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientDirection {
    /// `>` (also the default when no arrow is given)
    #[default]
    LeftToRight,
    /// `<`
    RightToLeft,
    /// `<>`
    CenterToEnds,
    /// `><`
    EndsToCenter,
}

impl GradientDirection {
    pub const ALL: [Self; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::CenterToEnds,
        Self::EndsToCenter,
    ];

    pub const fn arrow(self) -> &'static str {
        match self {
            Self::LeftToRight => ">",
            Self::RightToLeft => "<",
            Self::CenterToEnds => "<>",
            Self::EndsToCenter => "><",
        }
    }

    pub fn from_arrow(arrow: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.arrow() == arrow)
    }
}

/// Either a single color or a two-stop gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ColorSpec {
    Solid(Rgb),
    Gradient {
        start: Rgb,
        end: Rgb,
        direction: GradientDirection,
    },
}

impl ColorSpec {
    pub const WHITE: Self = Self::Solid(Rgb::WHITE);

    pub const fn gradient(start: Rgb, end: Rgb, direction: GradientDirection) -> Self {
        Self::Gradient {
            start,
            end,
            direction,
        }
    }

    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient { .. })
    }

    /// Colors for a run of `length` characters.
    ///
    /// A solid spec repeats its color.
    pub fn colors(&self, length: usize) -> Vec<Rgb> {
        match *self {
            Self::Solid(color) => vec![color; length],
            Self::Gradient {
                start,
                end,
                direction,
            } => generate(start, end, length, direction),
        }
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Rgb> for ColorSpec {
    fn from(color: Rgb) -> Self {
        Self::Solid(color)
    }
}

impl fmt::Display for ColorSpec {
    /// Canonical token form; parses back to an equal spec.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Gradient {
                start,
                end,
                direction,
            } => write!(f, "{start}-{end}{}", direction.arrow()),
        }
    }
}

impl FromStr for ColorSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value)
    }
}

impl From<ColorSpec> for String {
    fn from(value: ColorSpec) -> Self {
        value.to_string()
    }
}

/// Parses a solid (`#RGB`, `#RRGGBB`) or gradient (`#A-#B[arrow]`) token.
pub fn parse_color(token: &str) -> Result<ColorSpec, ParseError> {
    let token = token.trim();
    let invalid = || ParseError::InvalidFormat(token.to_string());

    let Some((start, rest)) = token.split_once('-') else {
        return Rgb::from_hex(token)
            .map(ColorSpec::Solid)
            .map_err(|_| invalid());
    };

    let start = Rgb::from_hex(start).map_err(|_| invalid())?;

    // The end color runs until the first non-hex character after '#'.
    let hex_len = rest
        .strip_prefix('#')
        .map(|digits| {
            digits
                .bytes()
                .take_while(u8::is_ascii_hexdigit)
                .count()
        })
        .ok_or_else(invalid)?;
    let (end, arrow) = rest.split_at(1 + hex_len);
    let end = Rgb::from_hex(end).map_err(|_| invalid())?;

    let arrow = arrow.trim_start();
    let direction = if arrow.is_empty() {
        GradientDirection::LeftToRight
    } else {
        GradientDirection::from_arrow(arrow).ok_or_else(invalid)?
    };

    Ok(ColorSpec::gradient(start, end, direction))
}

/// Malformed color or gradient token.
///
/// Always recoverable: callers fall back to a default color or reject the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid color token {0:?}: expected #RGB, #RRGGBB or #RRGGBB-#RRGGBB[>|<|<>|><]")]
    InvalidFormat(String),
}

impl ItemError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "COLOR_INVALID_FORMAT"
    }
}
