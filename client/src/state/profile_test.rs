use super::*;

fn fresh() -> (Store, ProfileStore) {
    let store = Store::in_memory();
    let profiles = ProfileStore::load(store.clone());
    (store, profiles)
}

#[test]
fn starts_signed_out() {
    let (_, profiles) = fresh();
    assert!(!profiles.is_authenticated());
    assert_eq!(profiles.xp(), 0);
}

#[test]
fn login_builds_default_profile() {
    let (store, profiles) = fresh();
    let p = profiles.login("   ");
    assert_eq!(p.name, DEFAULT_NAME);
    assert_eq!(p.role, DEFAULT_ROLE);
    assert_eq!(p.theme, Theme::Glass);
    assert_eq!(p.level, 1);
    assert!(profiles.is_authenticated());
    assert!(store.raw(keys::PROFILE).is_some());
}

#[test]
fn login_migrates_legacy_xp_once() {
    let (store, profiles) = fresh();
    store.set(keys::LEGACY_XP, &400).unwrap();
    let p = profiles.login("Asha");
    assert_eq!(p.xp, 400);
    assert_eq!(p.level, 3);
    assert!(store.raw(keys::LEGACY_XP).is_none());

    profiles.logout();
    assert_eq!(profiles.login("Asha").xp, 0);
}

#[test]
fn unreadable_legacy_xp_is_ignored() {
    let backend = crate::util::storage::MemoryStorage::new();
    crate::util::storage::KeyValueBackend::set_raw(&backend, keys::LEGACY_XP, "lots").unwrap();
    let profiles = ProfileStore::load(Store::new(backend));
    assert_eq!(profiles.login("Ravi").xp, 0);
}

#[test]
fn logout_removes_stored_profile() {
    let (store, profiles) = fresh();
    profiles.login("Asha");
    profiles.logout();
    assert!(!profiles.is_authenticated());
    assert!(store.raw(keys::PROFILE).is_none());
}

#[test]
fn update_merges_only_given_fields() {
    let (_, profiles) = fresh();
    assert!(!profiles.update(ProfilePatch { name: Some("X".into()), ..ProfilePatch::default() }));

    profiles.login("Asha");
    profiles.update(ProfilePatch { name: Some("Asha K".into()), ..ProfilePatch::default() });
    let p = profiles.current.get().unwrap();
    assert_eq!(p.name, "Asha K");
    assert_eq!(p.role, DEFAULT_ROLE);
}

#[test]
fn blank_name_update_keeps_old_name() {
    let (_, profiles) = fresh();
    profiles.login("Asha");
    profiles.update(ProfilePatch { name: Some("  ".into()), ..ProfilePatch::default() });
    assert_eq!(profiles.current.get().unwrap().name, "Asha");
}

#[test]
fn award_xp_requires_sign_in_and_recomputes_level() {
    let (store, profiles) = fresh();
    assert_eq!(profiles.award_xp(XpAward::Exported), None);

    profiles.login("Asha");
    profiles.update(ProfilePatch { xp: Some(95), ..ProfilePatch::default() });
    assert_eq!(profiles.award_xp(XpAward::ResultGenerated), Some(105));
    assert_eq!(profiles.current.get().unwrap().level, 2);

    let reloaded = ProfileStore::load(store);
    assert_eq!(reloaded.xp(), 105);
}

#[test]
fn stored_profile_loads_with_missing_optional_fields() {
    let (store, _) = fresh();
    let raw = r#"{"name":"Old","xp":10}"#;
    let backend_value: serde_json::Value = serde_json::from_str(raw).unwrap();
    store.set(keys::PROFILE, &backend_value).unwrap();
    let profiles = ProfileStore::load(store);
    let p = profiles.current.get().unwrap();
    assert_eq!(p.level, 1);
    assert!(p.badges.is_empty());
    assert_eq!(p.initial(), "O");
}
