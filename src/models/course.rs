//! Course model.
//!
//! A course is the unit of work the planner distributes over the week.
//! Difficulty feeds the fuzzy stress model; urgency (days until the exam)
//! is carried for display and export.

use serde::{Deserialize, Serialize};

/// A course competing for study slots.
///
/// `id` must be a positive integer; `0` is reserved as the rest marker
/// ([`crate::ga::REST`]) and never identifies a real course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (non-zero).
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Difficulty rating, 1 (easy) to 5 (hard).
    pub difficulty: u8,
    /// Days until the exam.
    pub urgency_days: u32,
}

impl Course {
    /// Creates a course with default difficulty (3) and urgency (7 days).
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            difficulty: 3,
            urgency_days: 7,
        }
    }

    /// Sets the difficulty rating.
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the days-until-exam urgency.
    pub fn with_urgency(mut self, urgency_days: u32) -> Self {
        self.urgency_days = urgency_days;
        self
    }
}
