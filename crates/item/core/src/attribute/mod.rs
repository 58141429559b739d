//! Typed attribute storage.
//!
//! - [`AttributeValue`]: closed set of scalar variants
//! - [`AttributeStore`]: insertion-ordered key → value container
//! - [`persisted`]: the lossy encoding used at the inventory boundary

pub mod persisted;
mod store;
mod value;

pub use persisted::{BooleanSchema, PersistedEntry, PersistedTag, PersistedValue};
pub use store::{AttributeKey, AttributeStore};
pub use value::{AttributeValue, ValueParseError};
