//! Declarative item definitions and their rendered snapshots.
//!
//! `item-core` holds the pure, host-independent half of a custom-item system:
//! typed attribute storage, color and gradient parsing, templated text
//! rendering, and the materialization of an [`ItemDefinition`] into an
//! immutable [`RenderedItem`]. Nothing here performs I/O; content loading and
//! the developer CLI live in sibling crates.
pub mod attribute;
pub mod color;
pub mod config;
pub mod definition;
pub mod error;
pub mod key;
pub mod registry;
pub mod text;
pub use attribute::{
    AttributeKey, AttributeStore, AttributeValue, BooleanSchema, PersistedEntry, PersistedTag,
    PersistedValue, ValueParseError,
};
pub use color::{ColorSpec, GradientDirection, ParseError, Rgb, generate, interpolate, parse_color};
pub use config::ItemConfig;
pub use definition::{
    Decoration, Decorations, DefinitionError, ItemDefinition, ItemFlags, ItemKind, Modifier,
    Recipe, RecipeError, RenderedItem,
};
pub use error::{ErrorSeverity, ItemError};
pub use key::{KeyError, NamespacedKey};
pub use registry::{DuplicateIdError, ItemConstructor, ItemRegistry, RegisterError};
pub use text::{
    NoPlaceholders, PlaceholderSource, Placeholders, StyledRun, TextField, coalesce,
    parse_styled_input, plain_text, substitute,
};
