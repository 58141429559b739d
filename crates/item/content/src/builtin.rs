//! Built-in item catalog as an explicit registration table.
//!
//! Each constructor builds one fully declared definition; [`BUILTIN_ITEMS`]
//! lists them in registration order. `data/items.ron` describes the same
//! catalog in data form.

use item_core::{
    Decorations, DefinitionError, ItemConfig, ItemConstructor, ItemDefinition, ItemFlags,
    ItemRegistry, Recipe, RegisterError, Rgb, TextField,
};

/// Registration table for every built-in item.
pub const BUILTIN_ITEMS: &[ItemConstructor] = &[
    paxel,
    spectral_lantern,
    wingsuit,
    infinity_rocket,
    shockwave,
];

/// Builds a registry holding every built-in item.
pub fn builtin_registry(config: &ItemConfig) -> Result<ItemRegistry, RegisterError> {
    let mut registry = ItemRegistry::new();
    registry.register_all(config, BUILTIN_ITEMS)?;
    Ok(registry)
}

const TOOL_LORE: Rgb = Rgb::new(0x00, 0xBB, 0xCC);

/// Multi-tool that switches to the right tool for the block being mined.
pub fn paxel(config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
    let recipe = Recipe::shaped(["PAS", " T ", " T "])?
        .with_ingredient('P', "diamond_pickaxe".parse()?)?
        .with_ingredient('A', "diamond_axe".parse()?)?
        .with_ingredient('S', "diamond_shovel".parse()?)?
        .with_ingredient('T', "stick".parse()?)?;

    ItemDefinition::from_config(config, "paxel", "diamond_pickaxe")?
        .with_name(TextField::solid("Paxel", Rgb::new(0x33, 0xFF, 0xBB)))
        .with_lore(vec![
            TextField::solid("The True Multi-Tool", TOOL_LORE),
            TextField::solid("Automatically switches to the right tool", TOOL_LORE),
            TextField::solid("for the job!", TOOL_LORE),
        ])
        .with_decorations(Decorations {
            unbreakable: true,
            flags: ItemFlags::HIDE_UNBREAKABLE | ItemFlags::HIDE_ATTRIBUTES,
            tier: Some(1),
            ..Default::default()
        })
        .with_recipe("paxel", recipe)
}

pub fn spectral_lantern(config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
    Ok(ItemDefinition::from_config(config, "lantern", "soul_lantern")?
        .with_name(TextField::solid("Spectral Lantern", Rgb::new(0x54, 0xBF, 0x90)))
        .with_lore_line(TextField::solid(
            "A lantern that guides lost souls and wards off darkness.",
            Rgb::new(0x54, 0xB8, 0xBF),
        )))
}

pub fn wingsuit(config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
    Ok(ItemDefinition::from_config(config, "wingsuit", "elytra")?
        .with_name(TextField::solid("Wingsuit", Rgb::new(0x43, 0xF0, 0xC0)))
        .with_lore_line(TextField::solid("Grants Immunity to Crash Damage", TOOL_LORE))
        .with_decorations(Decorations {
            fireproof: true,
            ..Default::default()
        }))
}

/// Rocket that is never consumed. Carries an `infinite` flag for the use handler.
pub fn infinity_rocket(config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
    ItemDefinition::from_config(config, "infinityrocket", "firework_rocket")?
        .with_name(TextField::solid("Infinity Rocket", Rgb::new(0x1D, 0xD6, 0x08)))
        .with_lore_line(TextField::solid(
            "An infinite source of propulsion...",
            Rgb::new(0x2D, 0x91, 0x37),
        ))
        .with_attribute("infinite", true)
}

pub fn shockwave(config: &ItemConfig) -> Result<ItemDefinition, DefinitionError> {
    Ok(ItemDefinition::from_config(config, "shockwave", "goat_horn")?
        .with_name(TextField::solid("Shockwave", Rgb::new(0x12, 0xEA, 0xDC)))
        .with_lore_line(TextField::solid(
            "Cause an earthquake at your feet",
            Rgb::new(0x43, 0xF0, 0xC0),
        )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::NamespacedKey;

    #[test]
    fn registers_every_builtin_in_order() {
        let registry = builtin_registry(&ItemConfig::default()).unwrap();
        let keys: Vec<&str> = registry.ids().map(NamespacedKey::key).collect();
        assert_eq!(
            keys,
            ["paxel", "lantern", "wingsuit", "infinityrocket", "shockwave"]
        );
    }

    #[test]
    fn builtins_follow_configured_namespace() {
        let config = ItemConfig::with_namespace("testing");
        let registry = builtin_registry(&config).unwrap();
        assert!(registry.ids().all(|id| id.namespace() == "testing"));
    }

    #[test]
    fn invalid_namespace_is_reported() {
        let config = ItemConfig::with_namespace("Bad Namespace");
        let err = builtin_registry(&config).unwrap_err();
        assert!(matches!(err, RegisterError::Definition { index: 0, .. }));
    }

    #[test]
    fn paxel_is_decorated_and_craftable() {
        let mut paxel = paxel(&ItemConfig::default()).unwrap();
        let snapshot = paxel.materialize();

        assert!(snapshot.unbreakable);
        assert!(!snapshot.fireproof);
        assert_eq!(snapshot.flags, ItemFlags::HIDE_UNBREAKABLE | ItemFlags::HIDE_ATTRIBUTES);
        assert_eq!(snapshot.tier, Some(1));

        let recipe = paxel.recipe("paxel").unwrap();
        assert_eq!(recipe.ingredients.len(), 4);
        assert!(recipe.validate().is_ok());
    }

    #[test]
    fn rocket_snapshot_carries_flag() {
        let mut registry = builtin_registry(&ItemConfig::default()).unwrap();
        let snapshots = registry.materialize_all();
        let rocket = &snapshots[3];

        assert_eq!(rocket.name_text(), "Infinity Rocket");
        assert_eq!(rocket.attributes.len(), 2);
        assert_eq!(rocket.attributes[1].key.key(), "infinite");
    }
}
