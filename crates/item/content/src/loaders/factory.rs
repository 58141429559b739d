//! Content factory for building item registries from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use item_core::{ItemConfig, ItemRegistry};
use tracing::debug;

use crate::builtin;
use crate::loaders::{ConfigLoader, ItemCatalog, ItemLoader, LoadResult};

/// Content factory that loads item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load item configuration from `config.toml`, or defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<ItemConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ItemConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Loads config and catalog and registers every item in catalog order.
    pub fn load_registry(&self) -> LoadResult<(ItemConfig, ItemRegistry)> {
        let config = self.load_config()?;
        let registry = self.load_registry_with(&config)?;
        Ok((config, registry))
    }

    /// Loads the catalog and registers it under an already resolved config.
    pub fn load_registry_with(&self, config: &ItemConfig) -> LoadResult<ItemRegistry> {
        let registry = self
            .load_items()?
            .into_registry(config)
            .with_context(|| format!("Failed to build registry from {}", self.data_dir.display()))?;

        debug!(items = registry.len(), namespace = %config.namespace, "loaded item registry");
        Ok(registry)
    }

    /// Registry of the built-in items, without touching the filesystem.
    pub fn builtin_registry(config: &ItemConfig) -> LoadResult<ItemRegistry> {
        builtin::builtin_registry(config).context("Failed to register built-in items")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), ItemConfig::default());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_items().unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
