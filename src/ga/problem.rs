//! Planner problem definition and fitness evaluation.
//!
//! Bridges the domain model ([`Course`]) to the GA: owns the planning
//! dimensions, supplies random genes, and scores chromosomes with the
//! coverage / overload / stress fitness function.

use std::collections::HashMap;

use rand::Rng;

use super::chromosome::{Chromosome, HOURS_PER_SLOT, REST};
use crate::fuzzy;
use crate::models::Course;

/// Weight for distinct-course coverage in the fitness function.
const COVERAGE_WEIGHT: f64 = 5.0;
/// Weight for the squared daily-overload penalty.
const OVERLOAD_WEIGHT: f64 = 2.0;
/// Weight for the accumulated fuzzy stress penalty.
const STRESS_WEIGHT: f64 = 3.0;

/// A weekly planning problem: the courses and the schedule dimensions.
///
/// Preconditions (checked by [`crate::validation`], not here): the course
/// list is non-empty with non-zero ids, and `days`, `slots_per_day`, and
/// `max_hours_per_day` are positive.
#[derive(Debug, Clone)]
pub struct PlannerProblem {
    /// Courses competing for slots.
    pub courses: Vec<Course>,
    /// Number of days in the planning horizon.
    pub days: usize,
    /// Study slots per day.
    pub slots_per_day: usize,
    /// Daily workload cap, in hours.
    pub max_hours_per_day: f64,
    /// Course difficulty by id, precomputed for fitness evaluation.
    difficulty_by_id: HashMap<u32, f64>,
}

impl PlannerProblem {
    /// Creates a problem over the given courses and dimensions.
    pub fn new(
        courses: Vec<Course>,
        days: usize,
        slots_per_day: usize,
        max_hours_per_day: f64,
    ) -> Self {
        let difficulty_by_id = courses
            .iter()
            .map(|c| (c.id, f64::from(c.difficulty)))
            .collect();
        Self {
            courses,
            days,
            slots_per_day,
            max_hours_per_day,
            difficulty_by_id,
        }
    }

    /// Total number of slots in a chromosome.
    pub fn chromosome_length(&self) -> usize {
        self.days * self.slots_per_day
    }

    /// Maximum assigned slots per day under the hour cap.
    pub fn capacity_slots(&self) -> usize {
        (self.max_hours_per_day / HOURS_PER_SLOT) as usize
    }

    /// Looks up a course by id.
    pub fn course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Difficulty of a course, 0.0 for unknown ids.
    pub fn difficulty_of(&self, id: u32) -> f64 {
        self.difficulty_by_id.get(&id).copied().unwrap_or(0.0)
    }

    /// Draws uniformly from the course ids plus [`REST`].
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> u32 {
        let idx = rng.random_range(0..=self.courses.len());
        if idx == self.courses.len() {
            REST
        } else {
            self.courses[idx].id
        }
    }

    /// Scores a chromosome.
    ///
    /// `max(0, 5·coverage − 2·overload − 3·stress)` where coverage is the
    /// distinct-course count, overload the sum of squared hour excesses,
    /// and stress the summed fuzzy stress over days (average difficulty is
    /// 0 on empty days, which the fuzzy model clamps to 1). The floor at 0
    /// flattens the landscape at the low end; heavily penalized schedules
    /// all score exactly 0.
    pub fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        let coverage = chromosome.coverage() as f64;

        let mut overload = 0.0;
        let mut stress_total = 0.0;
        for day in 0..self.days {
            let hours = chromosome.day_hours(self, day);
            if hours > self.max_hours_per_day {
                let excess = hours - self.max_hours_per_day;
                overload += excess * excess;
            }

            let difficulties: Vec<f64> = chromosome
                .day_slots(self, day)
                .iter()
                .filter(|&&g| g != REST)
                .map(|&g| self.difficulty_of(g))
                .collect();
            let avg_difficulty = if difficulties.is_empty() {
                0.0
            } else {
                difficulties.iter().sum::<f64>() / difficulties.len() as f64
            };

            stress_total += fuzzy::stress(hours, avg_difficulty);
        }

        (COVERAGE_WEIGHT * coverage - OVERLOAD_WEIGHT * overload - STRESS_WEIGHT * stress_total)
            .max(0.0)
    }
}
