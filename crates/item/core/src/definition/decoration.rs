use bitflags::bitflags;

bitflags! {
    /// Tooltip sections hidden on the rendered item.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    ///
    /// Human-readable formats use the `"HIDE_ENCHANTS | HIDE_DYE"` text form;
    /// binary formats store the raw bits.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemFlags: u16 {
        const HIDE_ENCHANTS           = 1 << 0;
        const HIDE_ATTRIBUTES         = 1 << 1;
        const HIDE_UNBREAKABLE        = 1 << 2;
        const HIDE_DESTROYS           = 1 << 3;
        const HIDE_PLACED_ON          = 1 << 4;
        const HIDE_ADDITIONAL_TOOLTIP = 1 << 5;
        const HIDE_DYE                = 1 << 6;
        const HIDE_ARMOR_TRIM         = 1 << 7;
        const HIDE_STORED_ENCHANTS    = 1 << 8;
    }
}

/// A named enchantment-like modifier with a level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub name: String,
    pub level: u32,
}

impl Modifier {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Declared decoration state of a definition.
///
/// The set of decoration kinds is closed; materialization applies them in a
/// fixed order on every pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Decorations {
    pub flags: ItemFlags,
    pub unbreakable: bool,
    pub fireproof: bool,
    /// Visual-tier id; `None` omits it from the rendered item.
    pub tier: Option<i32>,
    /// Replaces the rendered modifier set wholesale.
    pub modifiers: Vec<Modifier>,
}

impl Decorations {
    /// Sets a modifier's level, appending it when the name is new.
    pub fn upsert_modifier(&mut self, modifier: Modifier) {
        match self.modifiers.iter_mut().find(|m| m.name == modifier.name) {
            Some(existing) => existing.level = modifier.level,
            None => self.modifiers.push(modifier),
        }
    }

    pub fn remove_modifier(&mut self, name: &str) -> Option<Modifier> {
        let index = self.modifiers.iter().position(|m| m.name == name)?;
        Some(self.modifiers.remove(index))
    }

    pub fn modifier(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.name == name)
    }
}

/// One decoration value, for [`ItemDefinition::set_decoration`](super::ItemDefinition::set_decoration).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoration {
    Unbreakable(bool),
    Fireproof(bool),
    Flags(ItemFlags),
    Tier(Option<i32>),
    Modifiers(Vec<Modifier>),
}

impl Decoration {
    pub(crate) fn apply_to(self, decorations: &mut Decorations) {
        match self {
            Self::Unbreakable(value) => decorations.unbreakable = value,
            Self::Fireproof(value) => decorations.fireproof = value,
            Self::Flags(flags) => decorations.flags = flags,
            Self::Tier(tier) => decorations.tier = tier,
            Self::Modifiers(modifiers) => decorations.modifiers = modifiers,
        }
    }
}
