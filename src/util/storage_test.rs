use super::*;

#[test]
fn memory_storage_round_trips_strings() {
    let store = MemoryStorage::default();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn load_json_ignores_malformed_values() {
    let store = MemoryStorage::default();
    store.set("userInfo", "{not json");
    assert_eq!(load_json::<serde_json::Value>(&store, "userInfo"), None);
}

#[test]
fn save_json_then_load_json() {
    let store = MemoryStorage::default();
    save_json(&store, "counts", &vec![1, 2, 3]);
    assert_eq!(store.get("counts").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<u32>>(&store, "counts"), Some(vec![1, 2, 3]));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_the_browser() {
    let store = LocalStorage;
    store.set("theme", "light");
    assert_eq!(store.get("theme"), None);
    store.remove("theme");
}
