//! Item catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use item_core::{
    ColorSpec, Decorations, DefinitionError, ItemConfig, ItemDefinition, ItemKind, ItemRegistry,
    NamespacedKey, Recipe, TextField,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Text plus an optional color token; the configured default fills a missing color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpec {
    pub text: String,
    #[serde(default)]
    pub color: Option<ColorSpec>,
}

impl TextSpec {
    fn resolve(&self, default: ColorSpec) -> TextField {
        TextField::new(self.text.clone(), self.color.unwrap_or(default))
    }
}

/// One item as declared in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSpec {
    /// Bare key (placed in the configured namespace) or `namespace:key`.
    pub id: String,
    pub kind: String,
    pub name: TextSpec,
    #[serde(default)]
    pub lore: Vec<TextSpec>,
    /// `(key, literal)` pairs, e.g. `("speed", "1.5f")`.
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub decorations: Decorations,
    #[serde(default)]
    pub placeholders: BTreeMap<String, String>,
    /// Named shaped recipes.
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
}

impl DefinitionSpec {
    /// Builds a declared definition using `config` for namespace and colors.
    pub fn build(&self, config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
        let id = NamespacedKey::parse_with_default(&self.id, &config.namespace)?;
        let kind: ItemKind = self.kind.parse()?;

        let mut definition = ItemDefinition::new(id, kind)
            .with_name(self.name.resolve(config.default_name_color))
            .with_lore(
                self.lore
                    .iter()
                    .map(|line| line.resolve(config.default_lore_color))
                    .collect(),
            )
            .with_decorations(self.decorations.clone())
            .with_coalesce_runs(config.coalesce_runs);

        for (key, literal) in &self.attributes {
            definition.set_attribute_literal(key.as_str(), literal)?;
        }
        for (name, value) in &self.placeholders {
            definition = definition.with_placeholder(name.as_str(), value.as_str());
        }
        for (name, recipe) in &self.recipes {
            definition.add_recipe(name, recipe.clone())?;
        }

        Ok(definition)
    }
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<DefinitionSpec>,
}

impl ItemCatalog {
    /// Builds every definition and registers it in catalog order.
    pub fn into_registry(self, config: &ItemConfig) -> LoadResult<ItemRegistry> {
        let mut registry = ItemRegistry::new();
        for spec in &self.items {
            let definition = spec
                .build(config)
                .with_context(|| format!("Invalid item definition {:?}", spec.id))?;
            registry.insert(definition)?;
        }
        Ok(registry)
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::{AttributeValue, ItemFlags, Modifier, Rgb};

    const CATALOG: &str = r##"(
        items: [
            (
                id: "paxel",
                kind: "DIAMOND_PICKAXE",
                name: (text: "Paxel", color: Some("#33FFBB")),
                lore: [(text: "The True Multi-Tool")],
                attributes: [("speed", "1.5f"), ("owner", "'steve'")],
                decorations: (
                    flags: "HIDE_ENCHANTS | HIDE_ATTRIBUTES",
                    unbreakable: true,
                    modifiers: [(name: "efficiency", level: 5)],
                ),
            ),
        ],
    )"##;

    #[test]
    fn parses_and_builds_definition() {
        let catalog = ItemLoader::parse(CATALOG).unwrap();
        let config = ItemConfig::default();
        let definition = catalog.items[0].build(&config).unwrap();

        assert_eq!(definition.id().to_string(), "eventhorizons:paxel");
        assert_eq!(definition.kind().as_str(), "diamond_pickaxe");
        assert_eq!(definition.name().color, ColorSpec::Solid(Rgb::new(0x33, 0xFF, 0xBB)));
        assert_eq!(definition.lore()[0].color, config.default_lore_color);
        assert_eq!(
            definition.attributes().get("speed"),
            Some(&AttributeValue::Float(1.5))
        );

        let decorations = definition.decorations();
        assert_eq!(decorations.flags, ItemFlags::HIDE_ENCHANTS | ItemFlags::HIDE_ATTRIBUTES);
        assert!(decorations.unbreakable);
        assert_eq!(decorations.modifiers, vec![Modifier::new("efficiency", 5)]);
        assert_eq!(decorations.tier, None);
    }

    #[test]
    fn bad_literal_names_the_item() {
        let catalog = ItemLoader::parse(
            r#"(items: [(id: "broken", kind: "stone", name: (text: "x"), attributes: [("a", "??")])])"#,
        )
        .unwrap();

        let err = catalog.into_registry(&ItemConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("\"broken\""));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = ItemLoader::parse(
            r#"(items: [
                (id: "a", kind: "stone", name: (text: "A")),
                (id: "eventhorizons:a", kind: "dirt", name: (text: "B")),
            ])"#,
        )
        .unwrap();

        let err = catalog.into_registry(&ItemConfig::default()).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn invalid_ron_is_an_error() {
        assert!(ItemLoader::parse("(items: [").is_err());
    }
}
