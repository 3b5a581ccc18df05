use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_store_set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::new();
    store.set("role", "user");
    store.set("role", "admin");
    assert_eq!(store.get("role").as_deref(), Some("admin"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_deletes_key() {
    let store = MemoryStore::with_entries([("token", "abc"), ("role", "user")]);
    store.remove("token");
    assert_eq!(store.get("token"), None);
    assert_eq!(store.get("role").as_deref(), Some("user"));
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("token");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let writer = MemoryStore::new();
    let reader = writer.clone();
    writer.set("token", "t");
    assert_eq!(reader.get("token").as_deref(), Some("t"));
}

#[test]
fn borrowed_store_forwards_to_owner() {
    let store = MemoryStore::new();
    let borrowed = &store;
    borrowed.set("token", "t");
    assert_eq!(store.get("token").as_deref(), Some("t"));
    borrowed.remove("token");
    assert!(store.is_empty());
}

// =============================================================
// LocalStorageStore (non-browser build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_noop_outside_browser() {
    let store = LocalStorageStore;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
