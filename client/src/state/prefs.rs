//! Theme, language, and currency preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the layout (theme and language cycle buttons), every money-showing
//! tool (currency), and the dashboard selector. Each preference persists
//! under its own key and is shared through one [`Observable`].

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::{Deserialize, Serialize};
use toolkit::currency::CurrencyCode;

use super::observable::Observable;
use crate::util::storage::{Store, keys};

// =============================================================================
// THEME
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Glass,
    Light,
    Dark,
    Amoled,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Self::Glass, Self::Light, Self::Dark, Self::Amoled];

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Amoled => "amoled",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "linear-gradient(to bottom, #F7F9FC, #ECEFF3)",
            Self::Dark => "#0f172a",
            Self::Amoled => "#000000",
            Self::Glass => "linear-gradient(135deg, #0f172a 0%, #172554 40%, #1e3a8a 80%, #0f172a 100%)",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Glass => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Amoled,
            Self::Amoled => Self::Glass,
        }
    }
}

/// Apply `data-theme` on `<html>` and paint the body background.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute("data-theme", theme.css_class());
            let _ = el.set_attribute("class", theme.css_class());
        }
        if let Some(body) = doc.body() {
            let _ = body.style().set_property("background", theme.background());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

// =============================================================================
// LANGUAGE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::Hi, Self::Ta, Self::Te];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
            Self::Te => "te",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::Ta,
            Self::Ta => Self::Te,
            Self::Te => Self::En,
        }
    }

    /// Translate a UI label; unknown keys come back unchanged.
    #[must_use]
    pub fn t(self, key: &str) -> String {
        let hit = match (self, key) {
            (Self::En, "Dashboard") => Some("Dashboard"),
            (Self::En, "Tools") => Some("Tools"),
            (Self::Hi, "Dashboard") => Some("डैशबोर्ड"),
            (Self::Hi, "Tools") => Some("उपकरण"),
            (Self::Ta, "Dashboard") => Some("டாஷ்போர்டு"),
            (Self::Ta, "Tools") => Some("கருவிகள்"),
            (Self::Te, "Dashboard") => Some("డాష్‌బోర్డ్"),
            (Self::Te, "Tools") => Some("సాధనాలు"),
            _ => None,
        };
        hit.unwrap_or(key).to_owned()
    }
}

// =============================================================================
// PREFERENCES
// =============================================================================

#[derive(Clone, Debug)]
pub struct Preferences {
    store: Store,
    pub theme: Observable<Theme>,
    pub language: Observable<Language>,
    pub currency: Observable<CurrencyCode>,
}

impl Preferences {
    pub fn load(store: Store) -> Self {
        Self {
            theme: Observable::new(store.get(keys::THEME, Theme::default())),
            language: Observable::new(store.get(keys::LANGUAGE, Language::default())),
            currency: Observable::new(store.get(keys::CURRENCY, CurrencyCode::default())),
            store,
        }
    }

    /// Re-read all three keys; used when another tab wrote them.
    pub fn reload(&self) {
        let theme = self.store.get(keys::THEME, Theme::default());
        if theme != self.theme.get() {
            self.theme.set(theme);
        }
        let language = self.store.get(keys::LANGUAGE, Language::default());
        if language != self.language.get() {
            self.language.set(language);
        }
        let currency = self.store.get(keys::CURRENCY, CurrencyCode::default());
        if currency != self.currency.get() {
            self.currency.set(currency);
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.save(keys::THEME, &theme);
        self.theme.set(theme);
    }

    pub fn cycle_theme(&self) -> Theme {
        let next = self.theme.get().next();
        self.set_theme(next);
        next
    }

    pub fn set_language(&self, language: Language) {
        self.store.save(keys::LANGUAGE, &language);
        self.language.set(language);
    }

    pub fn cycle_language(&self) -> Language {
        let next = self.language.get().next();
        self.set_language(next);
        next
    }

    pub fn t(&self, key: &str) -> String {
        self.language.get().t(key)
    }

    pub fn set_currency(&self, currency: CurrencyCode) {
        self.store.save(keys::CURRENCY, &currency);
        self.currency.set(currency);
    }

    pub fn format_amount(&self, amount: f64) -> String {
        self.currency.get().format_amount(amount)
    }
}
