//! Local, simulated sign-in profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Signing in" only records a display name in browser storage. Nothing is
//! verified and nothing leaves the device. The profile gates history,
//! recents, favourites, and experience points.
//!
//! DESIGN
//! ======
//! At most one profile exists. It is created by [`ProfileStore::login`],
//! merged by [`ProfileStore::update`], and removed by
//! [`ProfileStore::logout`]. Every change is written through before
//! subscribers are notified.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use super::gamification::{XpAward, level_for_xp};
use super::history::HistoryItem;
use super::observable::Observable;
use super::prefs::{Language, Theme};
use crate::util::storage::{Store, keys};

pub const DEFAULT_NAME: &str = "User";
pub const DEFAULT_ROLE: &str = "Free Plan";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Kept for stored-format compatibility; tool history lives in its own key.
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub xp: u64,
    #[serde(default = "first_level")]
    pub level: u32,
    #[serde(default)]
    pub badges: Vec<String>,
}

fn first_level() -> u32 {
    1
}

impl UserProfile {
    /// Fresh profile for `name`; blank names become [`DEFAULT_NAME`].
    #[must_use]
    pub fn new(name: &str, xp: u64) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() { DEFAULT_NAME.to_owned() } else { name.to_owned() },
            email: String::new(),
            role: DEFAULT_ROLE.to_owned(),
            theme: Theme::Glass,
            language: Language::En,
            avatar: None,
            history: Vec::new(),
            xp,
            level: level_for_xp(xp),
            badges: Vec::new(),
        }
    }

    /// First letter of the name, upper-cased, for avatar bubbles.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub avatar: Option<String>,
    pub xp: Option<u64>,
    pub badges: Option<Vec<String>>,
}

impl ProfilePatch {
    fn apply(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            let name = name.trim();
            if !name.is_empty() {
                name.clone_into(&mut profile.name);
            }
        }
        if let Some(email) = self.email {
            profile.email = email;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(theme) = self.theme {
            profile.theme = theme;
        }
        if let Some(language) = self.language {
            profile.language = language;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = Some(avatar);
        }
        if let Some(xp) = self.xp {
            profile.xp = xp;
            profile.level = level_for_xp(xp);
        }
        if let Some(badges) = self.badges {
            profile.badges = badges;
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProfileStore {
    store: Store,
    pub current: Observable<Option<UserProfile>>,
}

impl ProfileStore {
    pub fn load(store: Store) -> Self {
        let current = store.get(keys::PROFILE, None::<UserProfile>);
        Self { store, current: Observable::new(current) }
    }

    pub fn reload(&self) {
        let current = self.store.get(keys::PROFILE, None::<UserProfile>);
        if current != self.current.get() {
            self.current.set(current);
        }
    }

    fn persist(&self, profile: Option<&UserProfile>) {
        match profile {
            Some(p) => self.store.save(keys::PROFILE, p),
            None => self.store.remove(keys::PROFILE),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    pub fn xp(&self) -> u64 {
        self.current.with(|p| p.as_ref().map_or(0, |p| p.xp))
    }

    /// Create the profile, carrying over points saved under the legacy
    /// standalone XP key, which is then dropped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn login(&self, name: &str) -> UserProfile {
        let legacy_xp = match self.store.try_get::<f64>(keys::LEGACY_XP) {
            Ok(Some(xp)) if xp.is_finite() && xp > 0.0 => xp.floor() as u64,
            Ok(_) => 0,
            Err(e) => {
                log::warn!("profile: ignoring unreadable legacy xp: {e}");
                0
            }
        };
        if self.store.raw(keys::LEGACY_XP).is_some() {
            self.store.remove(keys::LEGACY_XP);
        }
        let profile = UserProfile::new(name, legacy_xp);
        self.persist(Some(&profile));
        self.current.set(Some(profile.clone()));
        profile
    }

    pub fn logout(&self) {
        self.persist(None);
        self.current.set(None);
    }

    /// Merge `patch` into the signed-in profile. Returns `false` when nobody
    /// is signed in.
    pub fn update(&self, patch: ProfilePatch) -> bool {
        let Some(mut profile) = self.current.get() else {
            return false;
        };
        patch.apply(&mut profile);
        self.persist(Some(&profile));
        self.current.set(Some(profile));
        true
    }

    /// Add points for `award`; a no-op for guests. Returns the new total.
    pub fn award_xp(&self, award: XpAward) -> Option<u64> {
        let xp = self.current.with(|p| p.as_ref().map(|p| p.xp))? + award.points();
        self.update(ProfilePatch { xp: Some(xp), ..ProfilePatch::default() });
        Some(xp)
    }
}
