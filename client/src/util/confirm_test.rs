use std::cell::RefCell;

use super::*;
use crate::state::AppStores;
use crate::util::storage::Store;

#[test]
fn prompts_match_each_list() {
    assert_eq!(BulkReset::Expenses.prompt(), "Clear all expenses?");
    assert_eq!(BulkReset::DaySavings.prompt(), "Reset all savings history?");
    assert_eq!(BulkReset::Todos.prompt(), "Clear all tasks?");
    assert_eq!(BulkReset::Habits.prompt(), "Delete all habits?");
    assert_eq!(BulkReset::Note.prompt(), "Clear note?");
}

#[test]
fn declined_prompt_keeps_data() {
    let asked = RefCell::new(None);
    let mut ran = false;
    let done = gated_reset(
        BulkReset::Todos,
        |msg| {
            *asked.borrow_mut() = Some(msg.to_owned());
            false
        },
        || ran = true,
    );
    assert!(!done);
    assert!(!ran);
    assert_eq!(asked.into_inner().as_deref(), Some("Clear all tasks?"));
}

#[test]
fn accepted_prompt_clears_persisted_list() {
    let store = Store::in_memory();
    let stores = AppStores::load(&store);
    stores.habits.add(toolkit::productivity::Habit::new("h1".to_owned(), "Read").expect("valid habit"));
    assert_eq!(stores.habits.len(), 1);

    assert!(!gated_reset(BulkReset::Habits, |_| false, || stores.habits.reset()));
    assert_eq!(AppStores::load(&store).habits.len(), 1);

    assert!(gated_reset(BulkReset::Habits, |_| true, || stores.habits.reset()));
    assert_eq!(AppStores::load(&store).habits.len(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn nothing_is_cleared_without_a_browser_to_ask() {
    let mut ran = false;
    assert!(!confirm_reset(BulkReset::Expenses, || ran = true));
    assert!(!ran);
}
