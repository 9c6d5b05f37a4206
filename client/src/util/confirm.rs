//! Confirmation gate for bulk resets that wipe persisted lists.
//!
//! The browser `confirm()` dialog decides under `hydrate`. Elsewhere there is
//! nobody to ask, so the answer is always "no" and nothing is wiped.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Persisted collections that a page can clear in one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkReset {
    Expenses,
    DaySavings,
    Todos,
    Habits,
    Note,
}

impl BulkReset {
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Expenses => "Clear all expenses?",
            Self::DaySavings => "Reset all savings history?",
            Self::Todos => "Clear all tasks?",
            Self::Habits => "Delete all habits?",
            Self::Note => "Clear note?",
        }
    }
}

/// Run `reset` only when `ask` accepts the prompt for `kind`.
pub fn gated_reset(kind: BulkReset, ask: impl FnOnce(&str) -> bool, reset: impl FnOnce()) -> bool {
    if !ask(kind.prompt()) {
        log::info!("bulk reset declined: {kind:?}");
        return false;
    }
    reset();
    true
}

/// Browser confirmation dialog.
#[must_use]
pub fn ask_user(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// [`gated_reset`] with the browser dialog.
pub fn confirm_reset(kind: BulkReset, reset: impl FnOnce()) -> bool {
    gated_reset(kind, ask_user, reset)
}
