use super::*;

// =============================================================================
// MEMORY BACKEND
// =============================================================================

#[test]
fn memory_backend_round_trips_raw_text() {
    let backend = MemoryStorage::new();
    assert_eq!(backend.get_raw("k"), None);
    backend.set_raw("k", "v").unwrap();
    assert_eq!(backend.get_raw("k").as_deref(), Some("v"));
    backend.remove("k");
    assert_eq!(backend.get_raw("k"), None);
}

#[test]
fn memory_backend_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_raw("shared", "1").unwrap();
    assert_eq!(b.get_raw("shared").as_deref(), Some("1"));
}

#[test]
fn local_storage_misses_outside_the_browser() {
    #[cfg(not(feature = "hydrate"))]
    {
        assert_eq!(LocalStorage.get_raw(keys::THEME), None);
        assert!(matches!(LocalStorage.set_raw(keys::THEME, "\"dark\""), Err(StorageError::Unavailable)));
    }
}

// =============================================================================
// STORE
// =============================================================================

#[test]
fn get_returns_fallback_for_missing_key() {
    let store = Store::in_memory();
    let favs: Vec<String> = store.get(keys::FAVORITES, vec!["sip".to_owned()]);
    assert_eq!(favs, vec!["sip"]);
}

#[test]
fn set_then_get_decodes_json() {
    let store = Store::in_memory();
    store.set(keys::FAVORITES, &vec!["emi", "gst"]).unwrap();
    assert_eq!(store.raw(keys::FAVORITES).as_deref(), Some(r#"["emi","gst"]"#));
    let favs: Vec<String> = store.get(keys::FAVORITES, Vec::new());
    assert_eq!(favs, vec!["emi", "gst"]);
}

#[test]
fn corrupted_value_yields_fallback_and_is_kept() {
    let backend = MemoryStorage::new();
    backend.set_raw(keys::TODOS, "{not json").unwrap();
    let store = Store::new(backend.clone());

    let todos: Vec<String> = store.get(keys::TODOS, Vec::new());
    assert!(todos.is_empty());
    assert_eq!(backend.get_raw(keys::TODOS).as_deref(), Some("{not json"));
    assert!(matches!(store.try_get::<Vec<String>>(keys::TODOS), Err(StorageError::Decode { .. })));
}

#[test]
fn unquoted_legacy_theme_is_treated_as_corrupt() {
    let backend = MemoryStorage::new();
    backend.set_raw(keys::THEME, "dark").unwrap();
    let store = Store::new(backend);
    assert_eq!(store.get(keys::THEME, "glass".to_owned()), "glass");
}

#[test]
fn try_get_distinguishes_missing_from_present() {
    let store = Store::in_memory();
    assert!(store.try_get::<u64>(keys::LEGACY_XP).unwrap().is_none());
    store.set(keys::LEGACY_XP, &120).unwrap();
    assert_eq!(store.try_get::<u64>(keys::LEGACY_XP).unwrap(), Some(120));
}

#[test]
fn remove_clears_key() {
    let store = Store::in_memory();
    store.save(keys::DAILY_NOTE, "hello");
    store.remove(keys::DAILY_NOTE);
    assert_eq!(store.get(keys::DAILY_NOTE, String::new()), "");
}

#[test]
fn browser_store_write_fails_natively_without_panicking() {
    #[cfg(not(feature = "hydrate"))]
    {
        let store = Store::browser();
        assert!(store.set(keys::CURRENCY, "USD").is_err());
        store.save(keys::CURRENCY, "USD");
        assert_eq!(store.get(keys::CURRENCY, "INR".to_owned()), "INR");
    }
}
