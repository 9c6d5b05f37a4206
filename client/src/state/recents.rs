//! Recently opened tools for signed-in users.

#[cfg(test)]
#[path = "recents_test.rs"]
mod recents_test;

use serde::{Deserialize, Serialize};

use super::observable::Observable;
use super::profile::ProfileStore;
use crate::util::storage::{Store, keys};

pub const RECENTS_CAP: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTool {
    pub id: String,
    pub name: String,
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct RecentsStore {
    store: Store,
    profile: ProfileStore,
    pub items: Observable<Vec<RecentTool>>,
}

impl RecentsStore {
    pub fn load(store: Store, profile: ProfileStore) -> Self {
        let items = store.get(keys::RECENTS, Vec::new());
        Self { store, profile, items: Observable::new(items) }
    }

    /// Move `tool` to the front, dropping any older entry with the same id.
    pub fn visit(&self, tool: RecentTool) -> bool {
        if !self.profile.is_authenticated() || tool.id.is_empty() {
            return false;
        }
        self.items.update(|items| {
            items.retain(|r| r.id != tool.id);
            items.insert(0, tool);
            items.truncate(RECENTS_CAP);
        });
        self.items.with(|items| self.store.save(keys::RECENTS, items));
        true
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
        self.store.save(keys::RECENTS, &Vec::<RecentTool>::new());
    }
}
