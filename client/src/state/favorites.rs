//! Starred tool ids.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use super::observable::Observable;
use crate::util::storage::{Store, keys};

#[derive(Clone, Debug)]
pub struct FavoritesStore {
    store: Store,
    pub ids: Observable<Vec<String>>,
}

impl FavoritesStore {
    pub fn load(store: Store) -> Self {
        let ids = store.get(keys::FAVORITES, Vec::new());
        Self { store, ids: Observable::new(ids) }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.with(|ids| ids.iter().any(|f| f == id))
    }

    /// Star or unstar `id`; returns whether it is now a favourite.
    pub fn toggle(&self, id: &str) -> bool {
        let now_favorite = !self.is_favorite(id);
        self.ids.update(|ids| {
            if now_favorite {
                ids.push(id.to_owned());
            } else {
                ids.retain(|f| f != id);
            }
        });
        self.ids.with(|ids| self.store.save(keys::FAVORITES, ids));
        now_favorite
    }
}
