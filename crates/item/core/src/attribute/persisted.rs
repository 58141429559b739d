//! Persisted attribute encoding.
//!
//! The external inventory layer stores attributes as a flat sequence of
//! `(namespaced key, type tag, raw value)`. It has no boolean tag: `Bool` is
//! written as `BYTE` 0/1 and reads back as `Byte`. A stored `false` and a
//! stored byte `0` are indistinguishable after a round trip.
//!
//! Callers that need boolean semantics back can pass a [`BooleanSchema`]
//! naming the keys that hold booleans.

use std::collections::BTreeSet;

use super::{AttributeStore, AttributeValue};
use crate::key::{KeyError, NamespacedKey};

/// Type tag understood by the persisted format.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PersistedTag {
    Byte,
    Int,
    Float,
    Double,
    String,
}

/// Raw value as stored by the external layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PersistedValue {
    Byte(i8),
    Int(i32),
    Float(f32),
    Double(f64),
    String(String),
}

impl PersistedValue {
    pub const fn tag(&self) -> PersistedTag {
        match self {
            Self::Byte(_) => PersistedTag::Byte,
            Self::Int(_) => PersistedTag::Int,
            Self::Float(_) => PersistedTag::Float,
            Self::Double(_) => PersistedTag::Double,
            Self::String(_) => PersistedTag::String,
        }
    }
}

impl From<&AttributeValue> for PersistedValue {
    /// Lossy for `Bool`, which becomes `Byte(0 | 1)`.
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Bool(flag) => Self::Byte(i8::from(*flag)),
            AttributeValue::Byte(value) => Self::Byte(*value),
            AttributeValue::Int(value) => Self::Int(*value),
            AttributeValue::Float(value) => Self::Float(*value),
            AttributeValue::Double(value) => Self::Double(*value),
            AttributeValue::Str(value) => Self::String(value.clone()),
        }
    }
}

impl From<PersistedValue> for AttributeValue {
    fn from(value: PersistedValue) -> Self {
        match value {
            PersistedValue::Byte(value) => Self::Byte(value),
            PersistedValue::Int(value) => Self::Int(value),
            PersistedValue::Float(value) => Self::Float(value),
            PersistedValue::Double(value) => Self::Double(value),
            PersistedValue::String(value) => Self::Str(value),
        }
    }
}

/// One persisted `(key, tag, raw value)` record. The tag is derived from the value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedEntry {
    pub key: NamespacedKey,
    pub value: PersistedValue,
}

impl PersistedEntry {
    pub fn new(key: NamespacedKey, value: PersistedValue) -> Self {
        Self { key, value }
    }

    pub const fn tag(&self) -> PersistedTag {
        self.value.tag()
    }
}

/// Keys whose `Byte(0 | 1)` values decode back into `Bool`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanSchema {
    keys: BTreeSet<String>,
}

impl BooleanSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.keys.insert(key.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Builds a schema from every `Bool` currently held by `store`.
    pub fn from_store(store: &AttributeStore) -> Self {
        store
            .entries()
            .filter(|(_, value)| matches!(value, AttributeValue::Bool(_)))
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

impl FromIterator<String> for BooleanSchema {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Encodes `store` for the persisted boundary.
///
/// Bare store keys are qualified with `namespace`; keys that already contain a
/// `:` are parsed as full namespaced keys. Fails on the first key that is not
/// a valid namespaced key, before producing any output.
pub fn encode(store: &AttributeStore, namespace: &str) -> Result<Vec<PersistedEntry>, KeyError> {
    store
        .entries()
        .map(|(key, value)| {
            let key = NamespacedKey::parse_with_default(key, namespace)?;
            Ok(PersistedEntry::new(key, PersistedValue::from(value)))
        })
        .collect()
}

/// Decodes persisted records into a store.
///
/// Keys in `namespace` come back bare; foreign keys keep their qualified form.
/// Every `BYTE` stays a `Byte`, including ones that were written as `Bool`.
pub fn decode<'a>(
    entries: impl IntoIterator<Item = &'a PersistedEntry>,
    namespace: &str,
) -> AttributeStore {
    decode_with_schema(entries, namespace, &BooleanSchema::new())
}

/// Like [`decode`], but `Byte(0 | 1)` under a key listed in `schema` becomes `Bool`.
pub fn decode_with_schema<'a>(
    entries: impl IntoIterator<Item = &'a PersistedEntry>,
    namespace: &str,
    schema: &BooleanSchema,
) -> AttributeStore {
    let mut store = AttributeStore::new();
    for entry in entries {
        let key = if entry.key.namespace() == namespace {
            entry.key.key().to_string()
        } else {
            entry.key.to_string()
        };

        let value = match entry.value {
            PersistedValue::Byte(byte @ (0 | 1)) if schema.contains(&key) => {
                AttributeValue::Bool(byte == 1)
            }
            ref other => AttributeValue::from(other.clone()),
        };

        store.set(key, value);
    }
    store
}
