use std::fs;

use item_content::{ContentFactory, ItemLoader, builtin_registry};
use item_core::{ItemConfig, ItemFlags, NamespacedKey};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[test]
fn data_catalog_matches_builtin_table() {
    let (config, mut from_data) = ContentFactory::new(DATA_DIR).load_registry().unwrap();
    let mut from_code = builtin_registry(&config).unwrap();

    let data_digests: Vec<[u8; 32]> = from_data
        .materialize_all()
        .iter()
        .map(|snapshot| snapshot.digest().unwrap())
        .collect();
    let code_digests: Vec<[u8; 32]> = from_code
        .materialize_all()
        .iter()
        .map(|snapshot| snapshot.digest().unwrap())
        .collect();

    assert_eq!(data_digests.len(), 5);
    assert_eq!(data_digests, code_digests);

    for (data, code) in from_data.iter().zip(from_code.iter()) {
        assert!(data.recipes().eq(code.recipes()), "recipes differ for {}", data.id());
    }
}

#[test]
fn data_catalog_declares_decorations() {
    let (_, mut registry) = ContentFactory::new(DATA_DIR).load_registry().unwrap();
    let snapshots = registry.materialize_all();

    let paxel = &snapshots[0];
    assert!(paxel.unbreakable);
    assert_eq!(paxel.flags, ItemFlags::HIDE_UNBREAKABLE | ItemFlags::HIDE_ATTRIBUTES);
    assert_eq!(paxel.tier, Some(1));

    let wingsuit = &snapshots[2];
    assert!(wingsuit.fireproof);
    assert!(!wingsuit.unbreakable);
    assert_eq!(wingsuit.tier, None);

    let paxel = registry.iter().next().unwrap();
    assert_eq!(paxel.recipe("paxel").unwrap().shape, ["PAS", " T ", " T "]);
}

#[test]
fn loads_registry_from_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "namespace = \"testing\"\ndefault_lore_color = \"#00BBCC\"\ncoalesce_runs = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r##"(items: [
            (
                id: "glider",
                kind: "elytra",
                name: (text: "Glider {tier}", color: Some("#43F0C0-#00BBCC<>")),
                lore: [(text: "Soars")],
                decorations: (flags: "HIDE_DYE", tier: Some(3)),
                placeholders: {"tier": "II"},
            ),
        ])"##,
    )
    .unwrap();

    let (config, mut registry) = ContentFactory::new(dir.path()).load_registry().unwrap();
    assert_eq!(config.namespace, "testing");

    let id = NamespacedKey::new("testing", "glider").unwrap();
    let snapshot = registry.lookup_mut(&id).unwrap().materialize();

    assert_eq!(snapshot.name_text(), "Glider II");
    assert_eq!(snapshot.lore[0][0].color.to_string(), "#00bbcc");
    assert_eq!(snapshot.flags, ItemFlags::HIDE_DYE);
    assert_eq!(snapshot.tier, Some(3));
    assert!(snapshot.is_instance_of(&id));
    assert!(registry.identify(&snapshot).is_some());
}

#[test]
fn parses_embedded_catalog_text() {
    let catalog = ItemLoader::parse(include_str!("../data/items.ron")).unwrap();
    let ids: Vec<&str> = catalog.items.iter().map(|spec| spec.id.as_str()).collect();
    assert_eq!(ids, ["paxel", "lantern", "wingsuit", "infinityrocket", "shockwave"]);

    let config = ItemConfig::default();
    let rocket = catalog.items[3].build(&config).unwrap();
    assert_eq!(rocket.attributes().get_bool("infinite"), Some(true));
}
