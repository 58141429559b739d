//! Item definitions and their materialized snapshots.
//!
//! An [`ItemDefinition`] starts out *declared*: fields can be set freely and
//! nothing is rendered. The first [`ItemDefinition::materialize`] call moves it
//! to *materialized*; from then on every mutator recomputes the snapshot
//! eagerly, so [`ItemDefinition::snapshot`] never returns stale output.
//!
//! # Layer Order
//!
//! Every pass builds the snapshot from scratch and applies, in order:
//!
//! 1. base identity and text (id, kind, name, lore, identity marker, attributes)
//! 2. unbreakable
//! 3. fireproof
//! 4. flag set
//! 5. visual tier (absent when unset)
//! 6. modifiers (replaced wholesale)

mod decoration;
mod error;
mod kind;
mod recipe;
mod snapshot;

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

pub use decoration::{Decoration, Decorations, ItemFlags, Modifier};
pub use error::DefinitionError;
pub use kind::ItemKind;
pub use recipe::{Recipe, RecipeError};
pub use snapshot::RenderedItem;

use crate::attribute::{AttributeStore, AttributeValue, PersistedEntry, PersistedValue};
use crate::color::ColorSpec;
use crate::config::ItemConfig;
use crate::key::NamespacedKey;
use crate::text::{Placeholders, StyledRun, TextField, coalesce};

/// A declared, renderable item template.
#[derive(Clone, Debug)]
pub struct ItemDefinition {
    id: NamespacedKey,
    kind: ItemKind,
    name: TextField,
    lore: Vec<TextField>,
    attributes: AttributeStore,
    decorations: Decorations,
    placeholders: Placeholders,
    recipes: BTreeMap<String, Recipe>,
    coalesce_runs: bool,
    snapshot: Option<Arc<RenderedItem>>,
}

impl ItemDefinition {
    /// Creates a declared definition with an empty white name.
    pub fn new(id: NamespacedKey, kind: ItemKind) -> Self {
        Self {
            id,
            kind,
            name: TextField::default(),
            lore: Vec::new(),
            attributes: AttributeStore::new(),
            decorations: Decorations::default(),
            placeholders: Placeholders::new(),
            recipes: BTreeMap::new(),
            coalesce_runs: false,
            snapshot: None,
        }
    }

    /// Creates a definition whose id lives in `config.namespace`.
    ///
    /// The name starts empty in the configured default name color.
    pub fn from_config(config: &ItemConfig, key: &str, kind: &str) -> Result<Self, DefinitionError> {
        let id = NamespacedKey::new(config.namespace.as_str(), key)?;
        let kind: ItemKind = kind.parse()?;

        let mut definition = Self::new(id, kind);
        definition.name.color = config.default_name_color;
        definition.coalesce_runs = config.coalesce_runs;
        Ok(definition)
    }

    // ------------------------------------------------------------------------
    // Declaration (builder style, before registration)
    // ------------------------------------------------------------------------

    pub fn with_name(mut self, name: TextField) -> Self {
        self.name = name;
        self
    }

    pub fn with_lore_line(mut self, line: TextField) -> Self {
        self.lore.push(line);
        self
    }

    pub fn with_lore(mut self, lore: Vec<TextField>) -> Self {
        self.lore = lore;
        self
    }

    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Result<Self, DefinitionError> {
        let value: AttributeValue = value.into();
        self.set_attribute(key, value)?;
        Ok(self)
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_placeholder(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholders.insert(name.into(), value.into());
        self
    }

    pub fn with_recipe(mut self, key: &str, recipe: Recipe) -> Result<Self, DefinitionError> {
        self.add_recipe(key, recipe)?;
        Ok(self)
    }

    pub fn with_coalesce_runs(mut self, coalesce_runs: bool) -> Self {
        self.coalesce_runs = coalesce_runs;
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> &NamespacedKey {
        &self.id
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn name(&self) -> &TextField {
        &self.name
    }

    pub fn lore(&self) -> &[TextField] {
        &self.lore
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn recipe(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    /// Named recipes, ordered by name.
    pub fn recipes(&self) -> impl Iterator<Item = (&str, &Recipe)> + '_ {
        self.recipes.iter().map(|(key, recipe)| (key.as_str(), recipe))
    }

    pub fn is_materialized(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Latest snapshot, or `None` while still declared.
    pub fn snapshot(&self) -> Option<Arc<RenderedItem>> {
        self.snapshot.clone()
    }

    // ------------------------------------------------------------------------
    // Name & lore
    // ------------------------------------------------------------------------

    pub fn set_name(&mut self, name: TextField) {
        self.name = name;
        self.refresh();
    }

    /// Replaces the name template, keeping its color.
    pub fn set_name_text(&mut self, template: impl Into<String>) {
        self.name.template = template.into();
        self.refresh();
    }

    /// Replaces the name color, keeping its template.
    pub fn set_name_color(&mut self, color: ColorSpec) {
        self.name.color = color;
        self.refresh();
    }

    pub fn set_lore(&mut self, lore: Vec<TextField>) {
        self.lore = lore;
        self.refresh();
    }

    /// Sets line `index`, padding with empty lines when it lies past the end.
    pub fn set_lore_line(&mut self, index: usize, line: TextField) {
        if index >= self.lore.len() {
            self.lore.resize_with(index + 1, TextField::default);
        }
        self.lore[index] = line;
        self.refresh();
    }

    pub fn remove_lore_line(&mut self, index: usize) -> Result<TextField, DefinitionError> {
        if index >= self.lore.len() {
            return Err(DefinitionError::LoreIndexOutOfRange {
                index,
                len: self.lore.len(),
            });
        }

        let removed = self.lore.remove(index);
        self.refresh();
        Ok(removed)
    }

    pub fn clear_lore(&mut self) {
        self.lore.clear();
        self.refresh();
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    /// Sets or (with `None`) removes an attribute.
    ///
    /// The key must form a valid namespaced key (bare keys take the item's
    /// namespace) and must not collide with the identity marker. Keys in the
    /// item's own namespace are stored bare, so `"k"` and `"ns:k"` name the
    /// same attribute.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Option<AttributeValue>>,
    ) -> Result<(), DefinitionError> {
        let key = key.into();
        let Some(value) = value.into() else {
            self.remove_attribute(&key);
            return Ok(());
        };

        let persisted = NamespacedKey::parse_with_default(&key, self.id.namespace())?;
        if persisted == self.id {
            return Err(DefinitionError::ReservedAttribute(key));
        }

        self.attributes.set(self.store_key(&persisted), value);
        self.refresh();
        Ok(())
    }

    /// Parses `literal` (see [`AttributeValue`]'s `FromStr`) and sets it.
    pub fn set_attribute_literal(
        &mut self,
        key: impl Into<String>,
        literal: &str,
    ) -> Result<(), DefinitionError> {
        let value: AttributeValue = literal.parse()?;
        self.set_attribute(key, value)
    }

    /// Value stored under `key`, accepting the bare or the qualified spelling.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        let key = NamespacedKey::parse_with_default(key, self.id.namespace()).ok()?;
        self.attributes.get(&self.store_key(&key))
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<AttributeValue> {
        let key = NamespacedKey::parse_with_default(key, self.id.namespace()).ok()?;
        let removed = self.attributes.remove(&self.store_key(&key));
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    // ------------------------------------------------------------------------
    // Decorations
    // ------------------------------------------------------------------------

    pub fn set_decoration(&mut self, decoration: Decoration) {
        decoration.apply_to(&mut self.decorations);
        self.refresh();
    }

    pub fn add_flag(&mut self, flags: ItemFlags) {
        self.decorations.flags.insert(flags);
        self.refresh();
    }

    pub fn remove_flag(&mut self, flags: ItemFlags) {
        self.decorations.flags.remove(flags);
        self.refresh();
    }

    pub fn clear_flags(&mut self) {
        self.decorations.flags = ItemFlags::empty();
        self.refresh();
    }

    /// Adds a modifier, or updates the level of one with the same name.
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.decorations.upsert_modifier(modifier);
        self.refresh();
    }

    pub fn remove_modifier(&mut self, name: &str) -> Option<Modifier> {
        let removed = self.decorations.remove_modifier(name);
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    // ------------------------------------------------------------------------
    // Recipes (not part of the rendered snapshot)
    // ------------------------------------------------------------------------

    /// Adds or replaces the recipe named `key`.
    ///
    /// The name must be a valid key in the item's namespace and the recipe must
    /// validate; nothing changes otherwise.
    pub fn add_recipe(&mut self, key: &str, recipe: Recipe) -> Result<Option<Recipe>, DefinitionError> {
        NamespacedKey::new(self.id.namespace(), key)?;
        recipe.validate()?;
        Ok(self.recipes.insert(key.to_string(), recipe))
    }

    pub fn remove_recipe(&mut self, key: &str) -> Option<Recipe> {
        self.recipes.remove(key)
    }

    // ------------------------------------------------------------------------
    // Placeholders
    // ------------------------------------------------------------------------

    pub fn update_placeholder(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.placeholders.insert(name.into(), value.into());
        self.refresh();
    }

    /// Replaces every placeholder value at once.
    pub fn set_placeholders(&mut self, placeholders: Placeholders) {
        self.placeholders = placeholders;
        self.refresh();
    }

    // ------------------------------------------------------------------------
    // Materialization
    // ------------------------------------------------------------------------

    /// Computes the snapshot from the current declared state and stores it.
    ///
    /// Idempotent: without intervening mutation, repeated calls return equal
    /// snapshots.
    pub fn materialize(&mut self) -> Arc<RenderedItem> {
        let snapshot = Arc::new(self.render());
        debug!(
            id = %self.id,
            lore_lines = snapshot.lore.len(),
            attributes = snapshot.attributes.len(),
            "materialized item"
        );
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Renders without changing state.
    pub fn render(&self) -> RenderedItem {
        let mut item = RenderedItem::base(
            self.id.clone(),
            self.kind.clone(),
            self.render_field(&self.name),
            self.lore.iter().map(|line| self.render_field(line)).collect(),
            self.persisted_attributes(),
        );

        for (layer, apply) in DECORATION_LAYERS {
            apply(&self.decorations, &mut item);
            trace!(id = %self.id, layer, "applied decoration layer");
        }

        item
    }

    fn refresh(&mut self) {
        if self.is_materialized() {
            self.materialize();
        }
    }

    fn store_key(&self, key: &NamespacedKey) -> String {
        if key.namespace() == self.id.namespace() {
            key.key().to_string()
        } else {
            key.to_string()
        }
    }

    fn render_field(&self, field: &TextField) -> Vec<StyledRun> {
        let runs = field.render(&self.placeholders);
        if self.coalesce_runs { coalesce(runs) } else { runs }
    }

    fn persisted_attributes(&self) -> Vec<PersistedEntry> {
        let marker = PersistedEntry::new(self.id.clone(), PersistedValue::Byte(1));
        let mut entries = Vec::with_capacity(self.attributes.len() + 1);
        entries.push(marker);

        for (key, value) in self.attributes.entries() {
            match NamespacedKey::parse_with_default(key, self.id.namespace()) {
                Ok(key) => entries.push(PersistedEntry::new(key, PersistedValue::from(value))),
                Err(err) => warn!(id = %self.id, key, %err, "skipping unpersistable attribute"),
            }
        }

        entries
    }
}

type Layer = fn(&Decorations, &mut RenderedItem);

const DECORATION_LAYERS: [(&str, Layer); 5] = [
    ("unbreakable", apply_unbreakable),
    ("fireproof", apply_fireproof),
    ("flags", apply_flags),
    ("tier", apply_tier),
    ("modifiers", apply_modifiers),
];

fn apply_unbreakable(decorations: &Decorations, item: &mut RenderedItem) {
    item.unbreakable = decorations.unbreakable;
}

fn apply_fireproof(decorations: &Decorations, item: &mut RenderedItem) {
    item.fireproof = decorations.fireproof;
}

fn apply_flags(decorations: &Decorations, item: &mut RenderedItem) {
    item.flags = decorations.flags;
}

fn apply_tier(decorations: &Decorations, item: &mut RenderedItem) {
    item.tier = decorations.tier;
}

fn apply_modifiers(decorations: &Decorations, item: &mut RenderedItem) {
    item.modifiers.clone_from(&decorations.modifiers);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb, parse_color};

    fn lantern() -> ItemDefinition {
        let config = ItemConfig::default();
        ItemDefinition::from_config(&config, "lantern", "SOUL_LANTERN")
            .unwrap()
            .with_name(TextField::solid("Spectral Lantern", Rgb::new(0x54, 0xBF, 0x90)))
    }

    #[test]
    fn declared_until_materialized() {
        let mut item = lantern();
        assert!(!item.is_materialized());
        assert!(item.snapshot().is_none());

        item.set_name_text("Lantern");
        assert!(item.snapshot().is_none());

        item.materialize();
        assert!(item.is_materialized());
    }

    #[test]
    fn mutators_recompute_eagerly() {
        let mut item = lantern();
        item.materialize();

        item.set_name_text("Renamed");
        assert_eq!(item.snapshot().unwrap().name_text(), "Renamed");

        item.add_flag(ItemFlags::HIDE_ENCHANTS);
        assert_eq!(item.snapshot().unwrap().flags, ItemFlags::HIDE_ENCHANTS);
    }

    #[test]
    fn identity_marker_comes_first() {
        let mut item = lantern().with_attribute("charges", 3).unwrap();
        let snapshot = item.materialize();

        assert_eq!(snapshot.attributes[0].key.to_string(), "eventhorizons:lantern");
        assert_eq!(snapshot.attributes[0].value, PersistedValue::Byte(1));
        assert!(snapshot.is_instance_of(item.id()));
        assert_eq!(snapshot.attributes[1].key.to_string(), "eventhorizons:charges");
    }

    #[test]
    fn marker_key_is_reserved() {
        let mut item = lantern();
        let err = item.set_attribute("lantern", AttributeValue::Bool(true)).unwrap_err();
        assert_eq!(err, DefinitionError::ReservedAttribute("lantern".into()));
        assert!(item.attributes().is_empty());
    }

    #[test]
    fn qualified_and_bare_keys_share_one_attribute() {
        let mut item = lantern();
        item.set_attribute("charges", AttributeValue::Int(5)).unwrap();
        item.set_attribute("eventhorizons:charges", AttributeValue::Str("full".into()))
            .unwrap();
        let snapshot = item.materialize();

        let key = NamespacedKey::new("eventhorizons", "charges").unwrap();
        let matching = snapshot.attributes.iter().filter(|entry| entry.key == key).count();
        assert_eq!(matching, 1);
        assert_eq!(
            snapshot.attribute(&key),
            Some(&PersistedValue::String("full".into()))
        );
        assert_eq!(item.attribute("charges"), Some(&AttributeValue::Str("full".into())));

        assert!(item.remove_attribute("eventhorizons:charges").is_some());
        assert!(item.attributes().is_empty());
        assert_eq!(item.snapshot().unwrap().attributes.len(), 1);
    }

    #[test]
    fn foreign_namespace_keys_stay_qualified() {
        let mut item = lantern();
        item.set_attribute("other:charges", AttributeValue::Int(1)).unwrap();
        item.set_attribute("charges", AttributeValue::Int(2)).unwrap();

        assert_eq!(item.attributes().len(), 2);
        assert_eq!(item.attribute("other:charges"), Some(&AttributeValue::Int(1)));
        assert_eq!(item.attributes().get("charges"), Some(&AttributeValue::Int(2)));
    }

    #[test]
    fn invalid_attribute_key_is_rejected_before_mutation() {
        let mut item = lantern();
        item.materialize();
        let before = item.snapshot();

        assert!(item.set_attribute("Bad Key", AttributeValue::Int(1)).is_err());
        assert!(item.attributes().is_empty());
        assert_eq!(item.snapshot(), before);
    }

    #[test]
    fn set_lore_line_pads_with_empty_lines() {
        let mut item = lantern();
        item.set_lore_line(2, TextField::solid("third", Rgb::WHITE));

        assert_eq!(item.lore().len(), 3);
        assert_eq!(item.lore()[0], TextField::default());
        assert_eq!(item.lore()[2].template, "third");
    }

    #[test]
    fn remove_lore_line_out_of_range_leaves_state() {
        let mut item = lantern().with_lore_line(TextField::solid("only", Rgb::WHITE));
        let err = item.remove_lore_line(1).unwrap_err();

        assert_eq!(err, DefinitionError::LoreIndexOutOfRange { index: 1, len: 1 });
        assert_eq!(item.lore().len(), 1);
        assert_eq!(item.remove_lore_line(0).unwrap().template, "only");
    }

    #[test]
    fn placeholders_feed_rendering() {
        let mut item = lantern()
            .with_name(TextField::new("Lantern ({fuel})", parse_color("#fff").unwrap()))
            .with_placeholder("fuel", "full");
        assert_eq!(item.materialize().name_text(), "Lantern (full)");

        item.update_placeholder("fuel", "empty");
        assert_eq!(item.snapshot().unwrap().name_text(), "Lantern (empty)");

        item.set_placeholders(Placeholders::new());
        assert_eq!(item.snapshot().unwrap().name_text(), "Lantern ()");
    }

    #[test]
    fn coalesced_gradient_keeps_text() {
        let mut item = lantern()
            .with_name(TextField::new("aaaa", parse_color("#000-#000").unwrap()))
            .with_coalesce_runs(true);
        let snapshot = item.materialize();

        assert_eq!(snapshot.name.len(), 1);
        assert_eq!(snapshot.name_text(), "aaaa");
    }

    #[test]
    fn recipes_are_named_and_replaceable() {
        let pickaxe = Recipe::shaped(["DDD", " S ", " S "])
            .unwrap()
            .with_ingredient('D', "diamond".parse().unwrap())
            .unwrap()
            .with_ingredient('S', "stick".parse().unwrap())
            .unwrap();
        let mut item = lantern().with_recipe("lantern_basic", pickaxe.clone()).unwrap();
        item.materialize();
        let before = item.snapshot();

        let upgraded = pickaxe.clone().with_amount(2);
        assert_eq!(item.add_recipe("lantern_basic", upgraded).unwrap(), Some(pickaxe));
        assert_eq!(item.recipe("lantern_basic").unwrap().amount, 2);
        assert_eq!(item.snapshot(), before);

        let unbound = Recipe::shaped(["X"]).unwrap();
        let err = item.add_recipe("broken", unbound).unwrap_err();
        assert_eq!(err, DefinitionError::Recipe(RecipeError::MissingIngredient('X')));
        assert!(item.add_recipe("Bad Name", Recipe::shaped(["X"]).unwrap()).is_err());

        let names: Vec<&str> = item.recipes().map(|(name, _)| name).collect();
        assert_eq!(names, ["lantern_basic"]);
        assert!(item.remove_recipe("lantern_basic").is_some());
        assert_eq!(item.recipes().count(), 0);
    }

    #[test]
    fn unset_tier_is_absent() {
        let mut item = lantern();
        item.set_decoration(Decoration::Tier(Some(4)));
        assert_eq!(item.materialize().tier, Some(4));

        item.set_decoration(Decoration::Tier(None));
        assert_eq!(item.snapshot().unwrap().tier, None);
    }
}
