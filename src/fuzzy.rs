//! Fuzzy stress inference.
//!
//! Maps a day's study hours and average course difficulty to a continuous
//! stress value in `[0, 1]`. Mamdani-style: piecewise-linear fuzzification,
//! a seven-rule base with `min` conjunction and additive accumulation, then
//! weighted-centroid defuzzification.
//!
//! The model is pure and total: inputs outside the modeled ranges saturate
//! (hours clamp to `[0, 8]`, difficulty to `[1, 5]`), nothing is rejected.
//!
//! # Rule base
//!
//! | # | Hours | Difficulty | Stress | Weight |
//! |---|--------|-----------|--------|--------|
//! | 1 | low    | easy      | low    | 0.8  |
//! | 2 | medium | medium    | medium | 0.7  |
//! | 3 | high   | hard      | high   | 0.9  |
//! | 4 | high   | easy      | low    | 0.6  |
//! | 5 | medium | hard      | high   | 0.9  |
//! | 6 | low    | hard      | high   | 0.95 |
//! | 7 | low    | medium    | medium | 0.7  |
//!
//! Rule 6 is the time-pressure rule: too few hours for a hard course raises
//! stress rather than lowering it. The model captures mismatch between hours
//! and difficulty, not raw hours.
//!
//! # Reference
//! Mamdani & Assilian (1975), "An Experiment in Linguistic Synthesis with a
//! Fuzzy Logic Controller"

use std::fmt;

use serde::{Deserialize, Serialize};

/// Membership degrees of daily hours in the three linguistic terms.
///
/// Terms overlap, so the degrees are not required to sum to 1.
#[derive(Debug, Clone, Copy)]
struct HourTerms {
    low: f64,
    medium: f64,
    high: f64,
}

/// Membership degrees of average difficulty in the three linguistic terms.
#[derive(Debug, Clone, Copy)]
struct DifficultyTerms {
    easy: f64,
    medium: f64,
    hard: f64,
}

/// Accumulated rule activations per output bucket.
#[derive(Debug, Clone, Copy, Default)]
struct StressTerms {
    low: f64,
    medium: f64,
    high: f64,
}

/// Fuzzifies daily hours over `[0, 8]`.
///
/// Low peaks at 0 and reaches 0 at 2; medium is a trapezoid rising 1→3,
/// peaking at 3, falling 3→5; high rises 4→6 and saturates at 6.
fn fuzzify_hours(hours: f64) -> HourTerms {
    let h = hours.clamp(0.0, 8.0);

    let low = if h <= 0.0 {
        1.0
    } else if h < 2.0 {
        1.0 - h / 2.0
    } else {
        0.0
    };

    let medium = if h <= 1.0 || h >= 5.0 {
        0.0
    } else if h < 3.0 {
        (h - 1.0) / 2.0
    } else {
        (5.0 - h) / 2.0
    };

    let high = if h <= 4.0 {
        0.0
    } else if h < 6.0 {
        (h - 4.0) / 2.0
    } else {
        1.0
    };

    HourTerms { low, medium, high }
}

/// Fuzzifies average difficulty over `[1, 5]`.
///
/// Easy peaks at 1 and reaches 0 at 2.5; medium rises 2→3, peaks at 3,
/// falls 3→4; hard rises 3.5→5 and saturates at 5.
fn fuzzify_difficulty(difficulty: f64) -> DifficultyTerms {
    let d = difficulty.clamp(1.0, 5.0);

    let easy = if d <= 1.0 {
        1.0
    } else if d < 2.5 {
        (2.5 - d) / 1.5
    } else {
        0.0
    };

    let medium = if d <= 2.0 || d >= 4.0 {
        0.0
    } else if d < 3.0 {
        d - 2.0
    } else {
        4.0 - d
    };

    let hard = if d <= 3.5 {
        0.0
    } else if d < 5.0 {
        (d - 3.5) / 1.5
    } else {
        1.0
    };

    DifficultyTerms { easy, medium, hard }
}

/// Applies the seven-rule base and normalizes the bucket totals.
///
/// Each rule contributes `min(a, b) × weight` to one bucket; buckets
/// accumulate additively. If every activation is zero the buckets stay
/// zero (no normalization of an empty consequent).
fn apply_rules(hours: HourTerms, difficulty: DifficultyTerms) -> StressTerms {
    let mut stress = StressTerms::default();

    // Rule 1: low hours AND easy → low stress
    stress.low += hours.low.min(difficulty.easy) * 0.8;
    // Rule 2: medium hours AND medium difficulty → medium stress
    stress.medium += hours.medium.min(difficulty.medium) * 0.7;
    // Rule 3: high hours AND hard → high stress
    stress.high += hours.high.min(difficulty.hard) * 0.9;
    // Rule 4: high hours AND easy → low stress
    stress.low += hours.high.min(difficulty.easy) * 0.6;
    // Rule 5: medium hours AND hard → high stress
    stress.high += hours.medium.min(difficulty.hard) * 0.9;
    // Rule 6: low hours AND hard → high stress (time pressure)
    stress.high += hours.low.min(difficulty.hard) * 0.95;
    // Rule 7: low hours AND medium difficulty → medium stress
    stress.medium += hours.low.min(difficulty.medium) * 0.7;

    let total = stress.low + stress.medium + stress.high;
    if total > 0.0 {
        stress.low /= total;
        stress.medium /= total;
        stress.high /= total;
    }

    stress
}

/// Defuzzifies via weighted centroid: low=0.2, medium=0.5, high=0.8.
fn defuzzify(stress: StressTerms) -> f64 {
    let value = stress.low * 0.2 + stress.medium * 0.5 + stress.high * 0.8;
    value.clamp(0.0, 1.0)
}

/// Computes the stress level for one day.
///
/// Pure and deterministic; any real inputs are accepted and clamped to the
/// modeled ranges. The result is always in `[0, 1]`.
pub fn stress(daily_hours: f64, avg_difficulty: f64) -> f64 {
    let hours = fuzzify_hours(daily_hours);
    let difficulty = fuzzify_difficulty(avg_difficulty);
    defuzzify(apply_rules(hours, difficulty))
}

/// Three-bucket display label for a stress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLabel {
    Low,
    Medium,
    High,
}

impl StressLabel {
    /// Buckets a stress value: `< 0.33` → Low, `< 0.67` → Medium, else High.
    pub fn from_value(stress: f64) -> Self {
        if stress < 0.33 {
            StressLabel::Low
        } else if stress < 0.67 {
            StressLabel::Medium
        } else {
            StressLabel::High
        }
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressLabel::Low => write!(f, "Low"),
            StressLabel::Medium => write!(f, "Medium"),
            StressLabel::High => write!(f, "High"),
        }
    }
}
