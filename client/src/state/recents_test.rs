use super::*;

fn tool(id: &str) -> RecentTool {
    RecentTool { id: id.into(), name: id.to_uppercase(), path: "/finance".into() }
}

fn stores() -> (ProfileStore, RecentsStore) {
    let store = Store::in_memory();
    let profile = ProfileStore::load(store.clone());
    let recents = RecentsStore::load(store, profile.clone());
    (profile, recents)
}

#[test]
fn guests_do_not_track_recents() {
    let (_, recents) = stores();
    assert!(!recents.visit(tool("emi")));
    assert!(recents.items.get().is_empty());
}

#[test]
fn revisiting_moves_tool_to_front() {
    let (profile, recents) = stores();
    profile.login("Asha");
    recents.visit(tool("emi"));
    recents.visit(tool("sip"));
    recents.visit(tool("emi"));
    let ids: Vec<String> = recents.items.get().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["emi", "sip"]);
}

#[test]
fn keeps_at_most_eight() {
    let (profile, recents) = stores();
    profile.login("Asha");
    for n in 0..12 {
        recents.visit(tool(&format!("t{n}")));
    }
    let items = recents.items.get();
    assert_eq!(items.len(), RECENTS_CAP);
    assert_eq!(items[0].id, "t11");
    assert_eq!(items[7].id, "t4");
}

#[test]
fn clear_empties_list() {
    let (profile, recents) = stores();
    profile.login("Asha");
    recents.visit(tool("emi"));
    recents.clear();
    assert!(recents.items.get().is_empty());
}
