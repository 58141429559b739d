use std::env;

use crate::color::{ColorSpec, Rgb};

/// Rendering configuration shared by every definition in a registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemConfig {
    /// Namespace for bare identifiers and persisted attribute keys.
    pub namespace: String,
    /// Color used when a name is set without one.
    pub default_name_color: ColorSpec,
    /// Color used for lore lines set without one.
    pub default_lore_color: ColorSpec,
    /// Merge adjacent equal-color runs in rendered snapshots.
    pub coalesce_runs: bool,
}

impl ItemConfig {
    pub const DEFAULT_NAMESPACE: &'static str = "eventhorizons";

    pub fn new() -> Self {
        Self {
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
            default_name_color: ColorSpec::Solid(Rgb::WHITE),
            default_lore_color: ColorSpec::Solid(Rgb::WHITE),
            coalesce_runs: false,
        }
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::new()
        }
    }

    /// Applies environment overrides on top of `self`.
    ///
    /// Environment variables:
    /// - `ITEM_NAMESPACE` - namespace for bare identifiers
    /// - `ITEM_COALESCE_RUNS` - `true`/`false`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(namespace) = env::var("ITEM_NAMESPACE") {
            if !namespace.trim().is_empty() {
                self.namespace = namespace.trim().to_string();
            }
        }

        if let Some(coalesce) = read_env::<bool>("ITEM_COALESCE_RUNS") {
            self.coalesce_runs = coalesce;
        }

        self
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::new().with_env_overrides()
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
