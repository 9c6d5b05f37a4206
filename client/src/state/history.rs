//! Log of tool results for signed-in users, newest first.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use super::observable::Observable;
use super::profile::ProfileStore;
use crate::util::storage::{Store, keys};

pub const HISTORY_CAP: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    pub tool_id: String,
    pub tool_name: String,
    pub result: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Clone, Debug)]
pub struct HistoryStore {
    store: Store,
    profile: ProfileStore,
    pub items: Observable<Vec<HistoryItem>>,
}

impl HistoryStore {
    pub fn load(store: Store, profile: ProfileStore) -> Self {
        let items = store.get(keys::HISTORY, Vec::new());
        Self { store, profile, items: Observable::new(items) }
    }

    /// Prepend a result, keeping at most [`HISTORY_CAP`] entries. Guests are
    /// not recorded.
    pub fn record(&self, item: HistoryItem) -> bool {
        if !self.profile.is_authenticated() {
            return false;
        }
        self.items.update(|items| {
            items.insert(0, item);
            items.truncate(HISTORY_CAP);
        });
        self.items.with(|items| self.store.save(keys::HISTORY, items));
        true
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
        self.store.save(keys::HISTORY, &Vec::<HistoryItem>::new());
    }
}
