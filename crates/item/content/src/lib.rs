//! Item content: the built-in catalog and data-driven loaders.
//!
//! This crate houses the concrete items and provides loaders for RON/TOML data files:
//! - Built-in items (explicit constructor table)
//! - Item catalogs (data-driven via RON)
//! - Item configuration (data-driven via TOML)
//!
//! Both paths end in an [`item_core::ItemRegistry`]; the core never scans for
//! definitions itself.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{BUILTIN_ITEMS, builtin_registry};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DefinitionSpec, ItemCatalog, ItemLoader, LoadResult, TextSpec,
};
