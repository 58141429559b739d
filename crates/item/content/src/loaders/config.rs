//! Item configuration loader.

use std::path::Path;

use item_core::ItemConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for item configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to [`ItemConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ItemConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<ItemConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::{ColorSpec, Rgb};

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("namespace = \"horizons\"").unwrap();
        assert_eq!(config.namespace, "horizons");
        assert_eq!(config.default_lore_color, ColorSpec::Solid(Rgb::WHITE));
        assert!(!config.coalesce_runs);
    }

    #[test]
    fn colors_parse_from_tokens() {
        let config = ConfigLoader::parse(
            "default_name_color = \"#FFF-#000<>\"\ncoalesce_runs = true",
        )
        .unwrap();
        assert!(config.default_name_color.is_gradient());
        assert!(config.coalesce_runs);
    }

    #[test]
    fn malformed_color_is_an_error() {
        let err = ConfigLoader::parse("default_name_color = \"red\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
