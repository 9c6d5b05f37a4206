//! Productivity records (todos, time blocks, goals, habits) and the pomodoro
//! timer state machine.
//!
//! Records serialize with the camelCase field names the browser storage keys
//! have always held, so existing saved lists keep loading.

use serde::{Deserialize, Serialize};

use crate::error::ToolError;

#[cfg(test)]
#[path = "productivity_test.rs"]
mod productivity_test;

fn required(field: &'static str, raw: &str) -> Result<String, ToolError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ToolError::Missing { field });
    }
    Ok(trimmed.to_owned())
}

// =============================================================================
// TODOS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl Todo {
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] for blank text.
    pub fn new(id: String, text: &str, priority: Priority) -> Result<Self, ToolError> {
        Ok(Self { id, text: required("Task", text)?, completed: false, priority })
    }
}

/// Numbered checklist lines for the to-do PDF.
#[must_use]
pub fn todo_checklist(todos: &[Todo]) -> Vec<String> {
    todos
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. [{}] {}", i + 1, if t.completed { 'x' } else { ' ' }, t.text))
        .collect()
}

// =============================================================================
// TIME BLOCKS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    #[default]
    Work,
    Break,
    Personal,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [Self::Work, Self::Break, Self::Personal];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
            Self::Personal => "Personal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
    pub task: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
}

impl TimeBlock {
    /// # Errors
    ///
    /// Returns [`ToolError`] for a blank task or a time not in `HH:MM` form.
    pub fn new(id: String, time: &str, task: &str, kind: BlockKind) -> Result<Self, ToolError> {
        let time = time.trim();
        let valid = time.len() == 5
            && time.as_bytes()[2] == b':'
            && time[..2].parse::<u8>().is_ok_and(|h| h < 24)
            && time[3..].parse::<u8>().is_ok_and(|m| m < 60);
        if !valid {
            return Err(ToolError::Invalid(format!("not a time of day: {time}")));
        }
        Ok(Self { id, time: time.to_owned(), task: required("Task", task)?, kind })
    }
}

/// Insert keeping the schedule ordered by start time. Equal times keep
/// insertion order.
pub fn insert_time_block(blocks: &mut Vec<TimeBlock>, block: TimeBlock) {
    let at = blocks.partition_point(|b| b.time <= block.time);
    blocks.insert(at, block);
}

// =============================================================================
// GOALS
// =============================================================================

pub const DEFAULT_GOAL_DEADLINE: &str = "2025-12-31";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub deadline: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
}

impl Goal {
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] for a blank title.
    pub fn new(id: String, title: &str) -> Result<Self, ToolError> {
        Ok(Self {
            id,
            title: required("Goal", title)?,
            deadline: DEFAULT_GOAL_DEADLINE.to_owned(),
            progress: 0,
        })
    }

    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }
}

// =============================================================================
// HABITS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    pub streak: u32,
    /// ISO `YYYY-MM-DD` dates the habit was ticked.
    pub completed_dates: Vec<String>,
}

impl Habit {
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] for a blank title.
    pub fn new(id: String, title: &str) -> Result<Self, ToolError> {
        Ok(Self { id, title: required("Habit", title)?, streak: 0, completed_dates: Vec::new() })
    }

    #[must_use]
    pub fn is_done_on(&self, date: &str) -> bool {
        self.completed_dates.iter().any(|d| d == date)
    }

    /// Tick or untick `today`. Ticking extends the streak by one; unticking
    /// takes one off without going below zero.
    pub fn toggle_day(&mut self, today: &str) {
        if self.is_done_on(today) {
            self.completed_dates.retain(|d| d != today);
            self.streak = self.streak.saturating_sub(1);
        } else {
            self.completed_dates.push(today.to_owned());
            self.streak += 1;
        }
    }
}

// =============================================================================
// POMODORO
// =============================================================================

pub const FOCUS_SECS: u32 = 25 * 60;
pub const BREAK_SECS: u32 = 5 * 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PomodoroMode {
    #[default]
    Focus,
    Break,
}

impl PomodoroMode {
    #[must_use]
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Focus => FOCUS_SECS,
            Self::Break => BREAK_SECS,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

/// Countdown state. The view drives [`Pomodoro::tick`] once per second
/// while running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pomodoro {
    pub mode: PomodoroMode,
    pub remaining: u32,
    pub running: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroMode::Focus)
    }
}

impl Pomodoro {
    #[must_use]
    pub fn new(mode: PomodoroMode) -> Self {
        Self { mode, remaining: mode.duration_secs(), running: false }
    }

    pub fn toggle(&mut self) {
        if self.remaining > 0 {
            self.running = !self.running;
        }
    }

    /// Back to a full, paused session of the current mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn set_mode(&mut self, mode: PomodoroMode) {
        *self = Self::new(mode);
    }

    /// Advance one second. Returns `true` when this tick finished the session.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Fraction of the session still left, `0.0..=1.0`.
    #[must_use]
    pub fn fraction_left(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.mode.duration_secs())
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining)
    }
}

/// `mm:ss` with both parts zero-padded.
#[must_use]
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
