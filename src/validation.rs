//! Input validation for planning runs.
//!
//! The core itself never rejects input — numeric inputs are clamped and
//! structural violations are repaired — so these checks are the boundary
//! where bad data must stop. Detects:
//! - Empty course lists
//! - Reserved or duplicate course ids
//! - Malformed course names (empty, too long, reserved characters)
//! - Out-of-range difficulty or urgency
//! - Degenerate planner dimensions or GA parameters
//!
//! All violations are collected and reported together rather than
//! short-circuiting on the first one.

use std::collections::HashSet;

use crate::ga::{GaConfig, PlannerProblem, REST};
use crate::models::Course;

/// Maximum course name length.
pub const MAX_NAME_LEN: usize = 50;

/// Characters a course name must not contain.
pub const RESERVED_CHARS: [char; 4] = ['@', '#', '$', '%'];

/// Inclusive difficulty range.
pub const DIFFICULTY_RANGE: (u8, u8) = (1, 5);

/// Inclusive urgency range, in days.
pub const URGENCY_RANGE: (u32, u32) = (1, 365);

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The course list is empty.
    EmptyCourseList,
    /// A course uses the reserved rest id (0).
    ReservedId,
    /// Two courses share the same id.
    DuplicateId,
    /// A course name is empty.
    EmptyName,
    /// A course name exceeds [`MAX_NAME_LEN`] characters.
    NameTooLong,
    /// A course name contains a character from [`RESERVED_CHARS`].
    InvalidCharacter,
    /// Difficulty outside [`DIFFICULTY_RANGE`].
    DifficultyOutOfRange,
    /// Urgency outside [`URGENCY_RANGE`].
    UrgencyOutOfRange,
    /// A planner dimension or GA parameter is degenerate.
    InvalidParameter,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course list.
///
/// Checks:
/// 1. The list is non-empty.
/// 2. No course uses id 0 (the rest marker) and ids are unique.
/// 3. Names are non-empty, at most [`MAX_NAME_LEN`] characters, and free
///    of [`RESERVED_CHARS`].
/// 4. Difficulty is within 1..=5 and urgency within 1..=365.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourseList,
            "At least one course is required",
        ));
    }

    let mut seen_ids = HashSet::new();
    for course in courses {
        if course.id == REST {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Course '{}' uses the reserved id 0", course.name),
            ));
        } else if !seen_ids.insert(course.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course id: {}", course.id),
            ));
        }

        let name = course.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Course {} has an empty name", course.id),
            ));
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.push(ValidationError::new(
                ValidationErrorKind::NameTooLong,
                format!("Course name '{name}' exceeds {MAX_NAME_LEN} characters"),
            ));
        } else if name.chars().any(|c| RESERVED_CHARS.contains(&c)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCharacter,
                format!("Course name '{name}' contains a reserved character"),
            ));
        }

        if course.difficulty < DIFFICULTY_RANGE.0 || course.difficulty > DIFFICULTY_RANGE.1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DifficultyOutOfRange,
                format!(
                    "Course '{}' difficulty {} is outside 1..=5",
                    course.name, course.difficulty
                ),
            ));
        }

        if course.urgency_days < URGENCY_RANGE.0 || course.urgency_days > URGENCY_RANGE.1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::UrgencyOutOfRange,
                format!(
                    "Course '{}' urgency {} days is outside 1..=365",
                    course.name, course.urgency_days
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full planning run: the courses, the planner dimensions,
/// and the GA parameters.
///
/// Degenerate dimensions would collapse the capacity threshold
/// `floor(max_hours_per_day / 1.5)` to zero and force every slot to rest,
/// so they are rejected here rather than inside the core.
pub fn validate_problem(problem: &PlannerProblem, config: &GaConfig) -> ValidationResult {
    let mut errors = match validate_courses(&problem.courses) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    if problem.days < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "days must be at least 1",
        ));
    }
    if problem.slots_per_day < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "slots_per_day must be at least 1",
        ));
    }
    if problem.max_hours_per_day <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "max_hours_per_day must be positive",
        ));
    }
    if config.population_size < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "population_size must be at least 2",
        ));
    }
    if config.generations < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "generations must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
