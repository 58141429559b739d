use super::AttributeValue;

/// Key type for [`AttributeStore`]. Opaque; no ordering semantics.
pub type AttributeKey = String;

/// Typed scalar key-value container.
///
/// Entries keep insertion order so that iteration (and everything built from
/// it, like persisted encodings and snapshot digests) is deterministic.
/// Re-setting an existing key replaces its value in place and keeps the
/// original position.
///
/// None of the operations fail; an absent key simply reads as "not present".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeStore {
    entries: Vec<(AttributeKey, AttributeValue)>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, or removes it when `value` is `None`.
    ///
    /// Replacing a key fully replaces the old variant; nothing is merged.
    pub fn set(&mut self, key: impl Into<AttributeKey>, value: impl Into<Option<AttributeValue>>) {
        let key = key.into();
        match value.into() {
            Some(value) => match self.position(&key) {
                Some(index) => self.entries[index].1 = value,
                None => self.entries.push((key, value)),
            },
            None => {
                self.remove(&key);
            }
        }
    }

    /// Removes `key`, returning the previous value if any.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn has(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &AttributeValue)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Copies every entry of `other` into `self`; `other` wins on collision.
    pub fn merge_from(&mut self, other: &AttributeStore) {
        for (key, value) in other.entries() {
            self.set(key, value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AttributeValue::as_bool)
    }

    pub fn get_byte(&self, key: &str) -> Option<i8> {
        self.get(key).and_then(AttributeValue::as_byte)
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(AttributeValue::as_int)
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(AttributeValue::as_float)
    }

    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttributeValue::as_double)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttributeValue::as_str)
    }

    /// Sets a `Byte(1)` marker under `key`.
    pub fn mark(&mut self, key: impl Into<AttributeKey>) {
        self.set(key, AttributeValue::Byte(1));
    }

    /// True for `Bool(true)` or a non-zero `Byte` under `key`.
    pub fn has_flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(AttributeValue::is_truthy)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeStore
where
    K: Into<AttributeKey>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (key, value) in iter {
            let value: AttributeValue = value.into();
            store.set(key, value);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_none_removes_key() {
        let mut store = AttributeStore::new();
        store.set("charge", AttributeValue::Int(3));
        store.set("charge", None::<AttributeValue>);

        assert!(!store.has("charge"));
        assert!(store.is_empty());
    }

    #[test]
    fn reset_replaces_variant_and_keeps_position() {
        let mut store = AttributeStore::new();
        store.set("a", AttributeValue::Int(5));
        store.set("b", AttributeValue::Bool(true));
        store.set("a", AttributeValue::Str("x".into()));

        let entries: Vec<_> = store.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("a", &AttributeValue::Str("x".into())),
                ("b", &AttributeValue::Bool(true)),
            ]
        );
        assert_eq!(store.get_int("a"), None);
    }

    #[test]
    fn bool_stays_bool_in_memory() {
        let mut store = AttributeStore::new();
        store.set("a", AttributeValue::Bool(true));
        assert_eq!(store.get("a"), Some(&AttributeValue::Bool(true)));
    }

    #[test]
    fn merge_overwrites_on_collision() {
        let mut base: AttributeStore = [("a", 1), ("b", 2)].into_iter().collect();
        let mut other = AttributeStore::new();
        other.set("b", AttributeValue::Str("two".into()));
        other.set("c", AttributeValue::Byte(3));

        base.merge_from(&other);

        assert_eq!(base.get_int("a"), Some(1));
        assert_eq!(base.get_str("b"), Some("two"));
        assert_eq!(base.get_byte("c"), Some(3));
        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut store = AttributeStore::new();
        assert_eq!(store.remove("ghost"), None);
        assert_eq!(store.get("ghost"), None);
    }

    #[test]
    fn marker_flags() {
        let mut store = AttributeStore::new();
        store.mark("infinityrocket");
        store.set("off", AttributeValue::Byte(0));
        store.set("label", AttributeValue::Str("1".into()));

        assert!(store.has_flag("infinityrocket"));
        assert!(!store.has_flag("off"));
        assert!(!store.has_flag("label"));
        assert!(!store.has_flag("missing"));
    }
}
