use super::*;

#[test]
fn memory_storage_round_trips_strings() {
    let store = MemoryStorage::new();
    assert!(store.read("k").is_none());
    store.write("k", "v");
    assert_eq!(store.read("k").as_deref(), Some("v"));
    store.remove("k");
    assert!(store.read("k").is_none());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let alias = store.clone();
    store.write("k", "v");
    assert_eq!(alias.read("k").as_deref(), Some("v"));
}

#[test]
fn json_helpers_round_trip_values() {
    let store = MemoryStorage::new();
    save_json(&store, "pair", &vec![1, 2, 3]);
    let loaded: Option<Vec<i32>> = load_json(&store, "pair");
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}

#[test]
fn load_json_ignores_corrupt_entries() {
    let store = MemoryStorage::new();
    store.write("pair", "not json");
    let loaded: Option<Vec<i32>> = load_json(&store, "pair");
    assert!(loaded.is_none());
}

#[test]
fn browser_storage_noops_outside_the_browser() {
    let store = BrowserStorage;
    store.write("k", "v");
    assert!(store.read("k").is_none());
    store.remove("k");
}
