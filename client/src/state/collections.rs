//! Per-feature record lists and the autosaving daily note.
//!
//! DESIGN
//! ======
//! Each feature list is a [`Collection`] bound to one storage key. Records
//! are addressed by string id and written through on every change. Lists
//! have no cap; the feature decides whether new records go first or last.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use toolkit::finance::{DaySaving, Expense};
use toolkit::productivity::{Goal, Habit, TimeBlock, Todo};
use toolkit::student::Assignment;

use super::observable::Observable;
use crate::util::storage::{Store, keys};

/// A stored record addressable by id.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + 'static {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(Expense, Todo, Habit, Goal, TimeBlock, Assignment);

impl Record for DaySaving {
    fn id(&self) -> &str {
        &self.date
    }
}

/// Where [`Collection::add`] puts new records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insert {
    Front,
    Back,
}

#[derive(Clone, Debug)]
pub struct Collection<T> {
    store: Store,
    key: &'static str,
    insert: Insert,
    pub items: Observable<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn load(store: Store, key: &'static str, insert: Insert) -> Self {
        let items = store.get(key, Vec::new());
        Self { store, key, insert, items: Observable::new(items) }
    }

    fn persist(&self) {
        self.items.with(|items| self.store.save(self.key, items));
    }

    pub fn add(&self, record: T) {
        self.items.update(|items| match self.insert {
            Insert::Front => items.insert(0, record),
            Insert::Back => items.push(record),
        });
        self.persist();
    }

    /// Apply `f` to the record with `id`. Returns `false` when absent.
    pub fn update(&self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        let mut found = false;
        self.items.update(|items| {
            if let Some(record) = items.iter_mut().find(|r| r.id() == id) {
                f(record);
                found = true;
            }
        });
        if found {
            self.persist();
        }
        found
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.items.update(|items| {
            let before = items.len();
            items.retain(|r| r.id() != id);
            removed = items.len() != before;
        });
        if removed {
            self.persist();
        }
        removed
    }

    /// Replace the whole list, e.g. after an ordered insert.
    pub fn replace(&self, items: Vec<T>) {
        self.items.set(items);
        self.persist();
    }

    pub fn reset(&self) {
        self.replace(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// DAILY NOTE
// =============================================================================

/// Delay between the last keystroke and the write.
pub const NOTE_AUTOSAVE_MS: u32 = 1_000;

/// Scratchpad text with debounced persistence. Each edit bumps a sequence
/// number; only the commit carrying the latest number writes.
#[derive(Clone, Debug)]
pub struct DailyNote {
    store: Store,
    pub text: Observable<String>,
    seq: Arc<AtomicU64>,
}

impl DailyNote {
    pub fn load(store: Store) -> Self {
        let text = store.get(keys::DAILY_NOTE, String::new());
        Self { store, text: Observable::new(text), seq: Arc::new(AtomicU64::new(0)) }
    }

    /// Record an edit; returns the ticket to pass to [`DailyNote::commit`]
    /// once the debounce delay has elapsed.
    pub fn edit(&self, text: String) -> u64 {
        self.text.set(text);
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Persist if no newer edit arrived since `ticket`.
    pub fn commit(&self, ticket: u64) -> bool {
        if self.seq.load(Ordering::SeqCst) != ticket {
            return false;
        }
        self.text.with(|text| self.store.save(keys::DAILY_NOTE, text));
        true
    }

    pub fn clear(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        self.text.set(String::new());
        self.store.save(keys::DAILY_NOTE, "");
    }
}
