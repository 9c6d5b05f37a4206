use time::macros::datetime;

use super::*;

#[test]
fn zero_and_blank_results_are_not_recordable() {
    assert!(!is_recordable_result(""));
    assert!(!is_recordable_result("  "));
    assert!(!is_recordable_result("0"));
    assert!(is_recordable_result("0.5"));
    assert!(is_recordable_result("₹0"));
}

#[test]
fn record_result_logs_and_awards_for_signed_in_users() {
    let stores = AppStores::load(&Store::in_memory());
    let now = datetime!(2025-03-01 10:00 UTC);
    assert!(!stores.record_result("sip", "SIP Calculator", "₹1,000.00", now));

    stores.profile.login("Asha");
    assert!(stores.record_result("sip", "SIP Calculator", "₹1,000.00", now));
    assert!(!stores.record_result("sip", "SIP Calculator", "0", now));

    let items = stores.history.items.get();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].timestamp, 1_740_823_200_000);
    assert_eq!(stores.profile.xp(), 10);
}

#[test]
fn every_view_sees_the_same_profile() {
    let stores = AppStores::load(&Store::in_memory());
    let header_view = stores.clone();
    stores.profile.login("Asha");
    assert!(header_view.profile.is_authenticated());
    assert!(header_view.visit_tool("emi", "EMI Calculator", "/finance"));
    assert_eq!(stores.recents.items.get().len(), 1);
}

#[test]
fn reload_observes_profile_written_by_another_tab() {
    let store = Store::in_memory();
    let stores = AppStores::load(&store);
    let other_tab = AppStores::load(&store);
    other_tab.profile.login("Ravi");
    assert!(!stores.profile.is_authenticated());
    stores.reload();
    assert_eq!(stores.profile.current.get().unwrap().name, "Ravi");
}
