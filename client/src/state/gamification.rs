//! Experience points and levels.

#[cfg(test)]
#[path = "gamification_test.rs"]
mod gamification_test;

/// Actions that earn experience points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XpAward {
    ResultGenerated,
    Shared,
    Exported,
}

impl XpAward {
    #[must_use]
    pub fn points(self) -> u64 {
        match self {
            Self::ResultGenerated => 10,
            Self::Shared => 5,
            Self::Exported => 15,
        }
    }
}

/// `floor(sqrt(xp) / 10) + 1`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level_for_xp(xp: u64) -> u32 {
    ((xp as f64).sqrt() / 10.0).floor() as u32 + 1
}

/// Fill of the XP bar, `(sqrt(xp) mod 10) * 10`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn level_progress_percent(xp: u64) -> f64 {
    ((xp as f64).sqrt() % 10.0) * 10.0
}
