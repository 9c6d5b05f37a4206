//! Academic calculators and study trackers.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::error::{ToolError, in_range, non_negative, positive};

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;

/// Attendance threshold most universities enforce.
pub const ATTENDANCE_THRESHOLD: f64 = 0.75;

// =============================================================================
// MARKS AND GRADES
// =============================================================================

pub const ASSIGNMENT_MAX: f64 = 20.0;
pub const MID_TERM_MAX: f64 = 50.0;
pub const ATTENDANCE_MARKS_MAX: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InternalMarks {
    pub total: f64,
    pub max: f64,
    pub percentage: f64,
}

/// Sum of assignment (20), mid-term (50), and attendance (5) marks.
///
/// # Errors
///
/// Returns [`ToolError::OutOfRange`] when a component exceeds its maximum.
pub fn internal_marks(assignments: f64, mid_term: f64, attendance: f64) -> Result<InternalMarks, ToolError> {
    let total = in_range("Assignments", assignments, 0.0, ASSIGNMENT_MAX)?
        + in_range("Mid-Term", mid_term, 0.0, MID_TERM_MAX)?
        + in_range("Attendance", attendance, 0.0, ATTENDANCE_MARKS_MAX)?;
    let max = ASSIGNMENT_MAX + MID_TERM_MAX + ATTENDANCE_MARKS_MAX;
    Ok(InternalMarks { total, max, percentage: total / max * 100.0 })
}

/// One course row in the SGPA table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub credit: f64,
    /// Grade point on a 10-point scale.
    pub grade: f64,
}

impl Default for SubjectGrade {
    fn default() -> Self {
        Self { credit: 3.0, grade: 9.0 }
    }
}

/// Credit-weighted mean grade point.
///
/// # Errors
///
/// Returns [`ToolError`] when no credits are entered or a grade is outside
/// `0..=10`.
pub fn sgpa(subjects: &[SubjectGrade]) -> Result<f64, ToolError> {
    let mut credits = 0.0;
    let mut points = 0.0;
    for s in subjects {
        let credit = non_negative("Credits", s.credit)?;
        let grade = in_range("Grade Point", s.grade, 0.0, 10.0)?;
        credits += credit;
        points += credit * grade;
    }
    if credits <= 0.0 {
        return Err(ToolError::Missing { field: "Credits" });
    }
    Ok(points / credits)
}

/// Plain mean of semester SGPAs.
///
/// # Errors
///
/// Returns [`ToolError`] for an empty list or an SGPA outside `0..=10`.
#[allow(clippy::cast_precision_loss)]
pub fn cgpa(semesters: &[f64]) -> Result<f64, ToolError> {
    if semesters.is_empty() {
        return Err(ToolError::Missing { field: "Semesters" });
    }
    let mut sum = 0.0;
    for &s in semesters {
        sum += in_range("SGPA", s, 0.0, 10.0)?;
    }
    Ok(sum / semesters.len() as f64)
}

/// Score needed on the final to reach `target`, given the current score and
/// the weight (percent) it carries.
///
/// # Errors
///
/// Returns [`ToolError`] when the current weight leaves nothing for the final.
pub fn grade_target(current: f64, current_weight_pct: f64, target: f64) -> Result<f64, ToolError> {
    let current = non_negative("Current Grade", current)?;
    let weight = in_range("Current Weight (%)", current_weight_pct, 0.0, 100.0)?;
    let target = non_negative("Target Grade", target)?;
    let final_weight = positive("Final Exam Weight", 100.0 - weight)?;
    Ok((target - current * weight / 100.0) / (final_weight / 100.0))
}

// =============================================================================
// ATTENDANCE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub percentage: f64,
    /// Classes that can be missed while staying at or above the threshold.
    pub can_skip: u32,
    /// Consecutive classes needed to climb back to the threshold.
    pub must_attend: u32,
}

impl Attendance {
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.percentage >= ATTENDANCE_THRESHOLD * 100.0
    }
}

/// Attendance percentage against the fixed 75% threshold.
///
/// # Errors
///
/// Returns [`ToolError`] for zero total classes or more attended than held.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn attendance(attended: u32, total: u32) -> Result<Attendance, ToolError> {
    if total == 0 {
        return Err(ToolError::NotPositive { field: "Total Classes" });
    }
    if attended > total {
        return Err(ToolError::Invalid("Attended classes cannot exceed total classes".to_owned()));
    }
    let attended = f64::from(attended);
    let total = f64::from(total);
    let percentage = attended / total * 100.0;
    let required = ATTENDANCE_THRESHOLD * total;
    let (can_skip, must_attend) = if attended >= required {
        (((attended - required) / ATTENDANCE_THRESHOLD).floor() as u32, 0)
    } else {
        (0, ((required - attended) / (1.0 - ATTENDANCE_THRESHOLD)).ceil() as u32)
    };
    Ok(Attendance { percentage, can_skip, must_attend })
}

// =============================================================================
// EXAM COUNTDOWN
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
}

/// Whole days and remaining hours until `exam`; `None` once it has passed.
#[must_use]
pub fn countdown(exam: OffsetDateTime, now: OffsetDateTime) -> Option<Countdown> {
    let left: Duration = exam - now;
    if left.is_negative() {
        return None;
    }
    let days = left.whole_days();
    let hours = (left - Duration::days(days)).whole_hours();
    Some(Countdown { days, hours })
}

// =============================================================================
// ASSIGNMENTS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub subject: String,
    pub title: String,
    pub due_date: String,
    pub status: AssignmentStatus,
}

impl Assignment {
    /// Validate and build a pending assignment.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] when the title is blank.
    pub fn new(id: String, subject: &str, title: &str, due_date: String) -> Result<Self, ToolError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ToolError::Missing { field: "Title" });
        }
        Ok(Self {
            id,
            subject: subject.trim().to_owned(),
            title: title.to_owned(),
            due_date,
            status: AssignmentStatus::Pending,
        })
    }

    pub fn toggle(&mut self) {
        self.status = match self.status {
            AssignmentStatus::Pending => AssignmentStatus::Completed,
            AssignmentStatus::Completed => AssignmentStatus::Pending,
        };
    }
}

// =============================================================================
// FLASHCARDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// A deck with a cursor and a flipped flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardDeck {
    cards: Vec<Flashcard>,
    index: usize,
    flipped: bool,
}

impl Default for FlashcardDeck {
    fn default() -> Self {
        Self::new(vec![Flashcard {
            question: "Capital of France?".to_owned(),
            answer: "Paris".to_owned(),
        }])
    }
}

impl FlashcardDeck {
    #[must_use]
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards, index: 0, flipped: false }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Flashcard> {
        self.cards.get(self.index)
    }

    /// Text on the visible face of the current card.
    #[must_use]
    pub fn face(&self) -> String {
        match self.current() {
            None => "Add a card to get started".to_owned(),
            Some(c) if self.flipped => format!("Answer: {}", c.answer),
            Some(c) => format!("Question: {}", c.question),
        }
    }

    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (if self.cards.is_empty() { 0 } else { self.index + 1 }, self.cards.len())
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + 1) % self.cards.len();
            self.flipped = false;
        }
    }

    pub fn prev(&mut self) {
        if !self.cards.is_empty() {
            self.index = (self.index + self.cards.len() - 1) % self.cards.len();
            self.flipped = false;
        }
    }

    /// Append a card and jump to it.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Missing`] when either side is blank.
    pub fn add(&mut self, question: &str, answer: &str) -> Result<(), ToolError> {
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() {
            return Err(ToolError::Missing { field: "Question" });
        }
        if answer.is_empty() {
            return Err(ToolError::Missing { field: "Answer" });
        }
        self.cards.push(Flashcard { question: question.to_owned(), answer: answer.to_owned() });
        self.index = self.cards.len() - 1;
        self.flipped = false;
        Ok(())
    }
}
