//! Content loaders for reading item data from files.
//!
//! Item catalogs are RON, configuration is TOML. Both deserialize straight
//! into item-core types (with serde) or thin spec types that build them.

pub mod config;
pub mod factory;
pub mod item;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{DefinitionSpec, ItemCatalog, ItemLoader, TextSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
