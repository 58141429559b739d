use item_core::attribute::persisted::{decode, decode_with_schema, encode};
use item_core::{
    AttributeStore, AttributeValue, BooleanSchema, ItemConfig, ItemDefinition, PersistedTag,
    PersistedValue,
};

const NAMESPACE: &str = "eventhorizons";

#[test]
fn bool_reads_back_as_byte_after_round_trip() {
    let mut store = AttributeStore::new();
    store.set("a", AttributeValue::Bool(true));

    // In memory the variant is preserved.
    assert_eq!(store.get("a"), Some(&AttributeValue::Bool(true)));

    let entries = encode(&store, NAMESPACE).unwrap();
    assert_eq!(entries[0].tag(), PersistedTag::Byte);

    let reloaded = decode(&entries, NAMESPACE);
    assert_eq!(reloaded.get("a"), Some(&AttributeValue::Byte(1)));
    assert_ne!(reloaded, store);
}

#[test]
fn false_and_zero_byte_are_indistinguishable() {
    let mut flags = AttributeStore::new();
    flags.set("x", AttributeValue::Bool(false));
    let mut bytes = AttributeStore::new();
    bytes.set("x", AttributeValue::Byte(0));

    assert_eq!(encode(&flags, NAMESPACE), encode(&bytes, NAMESPACE));
}

#[test]
fn boolean_schema_restores_flags() {
    let mut store = AttributeStore::new();
    store.set("infinityrocket", AttributeValue::Bool(true));
    store.set("charges", AttributeValue::Byte(1));

    let schema = BooleanSchema::from_store(&store);
    let entries = encode(&store, NAMESPACE).unwrap();
    let reloaded = decode_with_schema(&entries, NAMESPACE, &schema);

    assert_eq!(reloaded, store);
    assert_eq!(reloaded.get("charges"), Some(&AttributeValue::Byte(1)));
}

#[test]
fn snapshot_attributes_decode_into_store() {
    let config = ItemConfig::default();
    let mut item = ItemDefinition::from_config(&config, "infinityrocket", "firework_rocket")
        .unwrap()
        .with_attribute("boost", 2.5f64)
        .unwrap()
        .with_attribute("minecraft:custom_tag", "kept")
        .unwrap();
    let snapshot = item.materialize();

    assert_eq!(snapshot.attributes[0].value, PersistedValue::Byte(1));

    let store = decode(&snapshot.attributes, NAMESPACE);
    assert!(store.has_flag("infinityrocket"));
    assert_eq!(store.get_double("boost"), Some(2.5));
    assert_eq!(store.get_str("minecraft:custom_tag"), Some("kept"));
}
