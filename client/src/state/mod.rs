//! Application state shared across every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one [`AppStores`] and provides it as context.
//! Views clone the handles they need; clones share values and subscribers,
//! so there is a single source of truth per key.
//!
//! ARCHITECTURE
//! ============
//! `observable` is the change-notification primitive. `prefs` and `profile`
//! hold global preferences and the simulated sign-in. `favorites`,
//! `history`, `recents`, and `gamification` derive from the profile.
//! `collections` holds per-feature record lists.

pub mod collections;
pub mod favorites;
pub mod gamification;
pub mod history;
pub mod observable;
pub mod prefs;
pub mod profile;
pub mod recents;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use time::OffsetDateTime;
use toolkit::finance::{DaySaving, Expense};
use toolkit::productivity::{Goal, Habit, TimeBlock, Todo};
use toolkit::student::Assignment;

use self::collections::{Collection, DailyNote, Insert};
use self::favorites::FavoritesStore;
use self::gamification::XpAward;
use self::history::{HistoryItem, HistoryStore};
use self::prefs::Preferences;
use self::profile::ProfileStore;
use self::recents::{RecentTool, RecentsStore};
use crate::util::storage::{Store, keys};

/// Whether a tool result is worth logging: non-empty and not a bare zero.
#[must_use]
pub fn is_recordable_result(result: &str) -> bool {
    let trimmed = result.trim();
    !trimmed.is_empty() && trimmed != "0"
}

#[derive(Clone, Debug)]
pub struct AppStores {
    pub prefs: Preferences,
    pub profile: ProfileStore,
    pub favorites: FavoritesStore,
    pub history: HistoryStore,
    pub recents: RecentsStore,
    pub expenses: Collection<Expense>,
    pub day_savings: Collection<DaySaving>,
    pub todos: Collection<Todo>,
    pub habits: Collection<Habit>,
    pub goals: Collection<Goal>,
    pub time_blocks: Collection<TimeBlock>,
    pub assignments: Collection<Assignment>,
    pub daily_note: DailyNote,
}

impl AppStores {
    pub fn load(store: &Store) -> Self {
        let profile = ProfileStore::load(store.clone());
        Self {
            prefs: Preferences::load(store.clone()),
            favorites: FavoritesStore::load(store.clone()),
            history: HistoryStore::load(store.clone(), profile.clone()),
            recents: RecentsStore::load(store.clone(), profile.clone()),
            expenses: Collection::load(store.clone(), keys::EXPENSES, Insert::Front),
            day_savings: Collection::load(store.clone(), keys::DAY_SAVINGS, Insert::Back),
            todos: Collection::load(store.clone(), keys::TODOS, Insert::Back),
            habits: Collection::load(store.clone(), keys::HABITS, Insert::Back),
            goals: Collection::load(store.clone(), keys::GOALS, Insert::Back),
            time_blocks: Collection::load(store.clone(), keys::TIME_BLOCKS, Insert::Back),
            assignments: Collection::load(store.clone(), keys::ASSIGNMENTS, Insert::Back),
            daily_note: DailyNote::load(store.clone()),
            profile,
        }
    }

    /// Pick up writes made by another tab.
    pub fn reload(&self) {
        self.prefs.reload();
        self.profile.reload();
    }

    /// Log a result to history and award points. Guests get neither.
    pub fn record_result(&self, tool_id: &str, tool_name: &str, result: &str, now: OffsetDateTime) -> bool {
        if !is_recordable_result(result) {
            return false;
        }
        let timestamp = i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or_default();
        let item = HistoryItem {
            id: crate::util::ids::new_id(),
            tool_id: tool_id.to_owned(),
            tool_name: tool_name.to_owned(),
            result: result.to_owned(),
            timestamp,
        };
        if !self.history.record(item) {
            return false;
        }
        self.profile.award_xp(XpAward::ResultGenerated);
        true
    }

    pub fn visit_tool(&self, tool_id: &str, tool_name: &str, path: &str) -> bool {
        self.recents.visit(RecentTool {
            id: tool_id.to_owned(),
            name: tool_name.to_owned(),
            path: path.to_owned(),
        })
    }
}
