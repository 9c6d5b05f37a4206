use super::*;

#[test]
fn toggle_adds_then_removes() {
    let store = Store::in_memory();
    let favs = FavoritesStore::load(store.clone());
    assert!(favs.toggle("emi"));
    assert!(favs.toggle("gst"));
    assert!(favs.is_favorite("emi"));
    assert!(!favs.toggle("emi"));
    assert!(!favs.is_favorite("emi"));
    assert_eq!(store.raw(keys::FAVORITES).as_deref(), Some(r#"["gst"]"#));
}

#[test]
fn favourites_survive_reload() {
    let store = Store::in_memory();
    FavoritesStore::load(store.clone()).toggle("bmi-calc");
    assert!(FavoritesStore::load(store).is_favorite("bmi-calc"));
}
