use super::{ItemFlags, ItemKind, Modifier};
use crate::attribute::{PersistedEntry, PersistedValue};
use crate::key::NamespacedKey;
use crate::text::{StyledRun, plain_text};

/// Immutable output of [`ItemDefinition::materialize`](super::ItemDefinition::materialize).
///
/// Shared as `Arc<RenderedItem>`; safe to hand across a scheduling boundary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem {
    pub id: NamespacedKey,
    pub kind: ItemKind,
    pub name: Vec<StyledRun>,
    pub lore: Vec<Vec<StyledRun>>,
    /// Flattened persisted attributes, identity marker first.
    pub attributes: Vec<PersistedEntry>,
    pub unbreakable: bool,
    pub fireproof: bool,
    pub flags: ItemFlags,
    pub tier: Option<i32>,
    pub modifiers: Vec<Modifier>,
}

impl RenderedItem {
    /// Base layer: identity and text, with no decorations applied.
    pub(crate) fn base(
        id: NamespacedKey,
        kind: ItemKind,
        name: Vec<StyledRun>,
        lore: Vec<Vec<StyledRun>>,
        attributes: Vec<PersistedEntry>,
    ) -> Self {
        Self {
            id,
            kind,
            name,
            lore,
            attributes,
            unbreakable: false,
            fireproof: false,
            flags: ItemFlags::empty(),
            tier: None,
            modifiers: Vec::new(),
        }
    }

    /// True when the item carries a non-zero identity marker for `id`.
    pub fn is_instance_of(&self, id: &NamespacedKey) -> bool {
        matches!(
            self.attribute(id),
            Some(PersistedValue::Byte(marker)) if *marker != 0
        )
    }

    pub fn attribute(&self, key: &NamespacedKey) -> Option<&PersistedValue> {
        self.attributes
            .iter()
            .find(|entry| &entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn name_text(&self) -> String {
        plain_text(&self.name)
    }

    pub fn lore_text(&self) -> Vec<String> {
        self.lore.iter().map(|line| plain_text(line)).collect()
    }

    /// SHA-256 over the bincode encoding of the snapshot.
    ///
    /// Equal snapshots always produce equal digests. Encoding failures are
    /// returned rather than hashed as empty input.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}
