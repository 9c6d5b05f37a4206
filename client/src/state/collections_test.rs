use toolkit::productivity::Priority;

use super::*;

fn todo(id: &str) -> Todo {
    Todo::new(id.to_owned(), &format!("task {id}"), Priority::Medium).unwrap()
}

// =============================================================================
// COLLECTION
// =============================================================================

#[test]
fn add_respects_insert_position() {
    let store = Store::in_memory();
    let back = Collection::<Todo>::load(store.clone(), keys::TODOS, Insert::Back);
    back.add(todo("a"));
    back.add(todo("b"));
    let ids: Vec<String> = back.items.get().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["a", "b"]);

    let front = Collection::<Todo>::load(Store::in_memory(), keys::TODOS, Insert::Front);
    front.add(todo("a"));
    front.add(todo("b"));
    assert_eq!(front.items.get()[0].id, "b");
}

#[test]
fn update_and_remove_by_id() {
    let store = Store::in_memory();
    let todos = Collection::<Todo>::load(store.clone(), keys::TODOS, Insert::Back);
    todos.add(todo("a"));
    assert!(todos.update("a", |t| t.completed = true));
    assert!(!todos.update("zz", |t| t.completed = true));
    assert!(todos.items.get()[0].completed);

    assert!(todos.remove("a"));
    assert!(!todos.remove("a"));
    assert!(todos.is_empty());
}

#[test]
fn changes_are_written_through() {
    let store = Store::in_memory();
    let todos = Collection::<Todo>::load(store.clone(), keys::TODOS, Insert::Back);
    todos.add(todo("a"));
    let reloaded = Collection::<Todo>::load(store, keys::TODOS, Insert::Back);
    assert_eq!(reloaded.len(), 1);
    reloaded.reset();
    assert!(reloaded.is_empty());
}

#[test]
fn day_savings_are_keyed_by_date() {
    let saving = DaySaving { date: "2025-03-01".into(), amount: 50.0 };
    assert_eq!(Record::id(&saving), "2025-03-01");
}

// =============================================================================
// DAILY NOTE
// =============================================================================

#[test]
fn only_latest_edit_commits() {
    let store = Store::in_memory();
    let note = DailyNote::load(store.clone());
    let first = note.edit("h".into());
    let second = note.edit("hi".into());

    assert!(!note.commit(first));
    assert!(store.raw(keys::DAILY_NOTE).is_none());
    assert!(note.commit(second));
    assert_eq!(store.get(keys::DAILY_NOTE, String::new()), "hi");
}

#[test]
fn clear_invalidates_pending_commit() {
    let store = Store::in_memory();
    let note = DailyNote::load(store.clone());
    let ticket = note.edit("draft".into());
    note.clear();
    assert!(!note.commit(ticket));
    assert_eq!(DailyNote::load(store).text.get(), "");
}

#[test]
fn pending_commit_lands_after_view_handle_is_dropped() {
    let store = Store::in_memory();
    let view_handle = DailyNote::load(store.clone());
    let timer_handle = view_handle.clone();
    let ticket = view_handle.edit("draft".to_owned());
    drop(view_handle);

    assert!(timer_handle.commit(ticket));
    assert_eq!(DailyNote::load(store).text.get(), "draft");
}
