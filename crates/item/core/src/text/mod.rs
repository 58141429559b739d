//! Placeholder substitution and text styling.
//!
//! A [`TextField`] is rendered in two steps: `{name}` placeholders are
//! substituted in one pass, then the resulting string is colored as a single
//! run (solid) or one run per character (gradient).

mod field;
mod input;
mod placeholder;

pub use field::{StyledRun, TextField, coalesce, plain_text};
pub use input::parse_styled_input;
pub use placeholder::{NoPlaceholders, PlaceholderSource, Placeholders, substitute};
