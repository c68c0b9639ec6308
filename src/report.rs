//! Weekly plan decoding.
//!
//! Turns a chromosome into the readable structure consumed by export and
//! display layers: day labels, slot-by-slot course names (or the rest
//! marker), and per-day summary figures. All of it is derived data — the
//! optimizer never reads it back.

use serde::Serialize;

use crate::fuzzy::{self, StressLabel};
use crate::ga::{Chromosome, PlannerProblem, HOURS_PER_SLOT, REST};

/// Labels for the first seven days; later days fall back to `Day {index}`.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Labels for the first three slots; later slots fall back to `Slot {index}`.
pub const SLOT_NAMES: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// Entry shown for an unassigned slot.
pub const REST_LABEL: &str = "Rest";

/// One slot of a decoded day: its label and the course name or [`REST_LABEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotPlan {
    /// Slot label ("Morning", …, or "Slot 3").
    pub label: String,
    /// Course name, or [`REST_LABEL`].
    pub entry: String,
}

/// One decoded day with its summary figures.
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    /// Day label ("Monday", …, or "Day 7").
    pub label: String,
    /// Slot entries in slot order.
    pub slots: Vec<SlotPlan>,
    /// Total assigned study hours.
    pub total_hours: f64,
    /// Mean difficulty of the day's courses (0.0 if none).
    pub avg_difficulty: f64,
    /// Fuzzy stress value for the day.
    pub stress: f64,
    /// Three-bucket label for `stress`.
    pub stress_label: StressLabel,
}

/// A fully decoded weekly plan, days in horizon order.
#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    /// Decodes a chromosome against its problem.
    pub fn decode(problem: &PlannerProblem, chromosome: &Chromosome) -> Self {
        let days = (0..problem.days)
            .map(|day| decode_day(problem, chromosome, day))
            .collect();
        Self { days }
    }

    /// Finds a day by its label.
    pub fn day(&self, label: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.label == label)
    }
}

fn decode_day(problem: &PlannerProblem, chromosome: &Chromosome, day: usize) -> DayPlan {
    let label = DAY_NAMES
        .get(day)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Day {day}"));

    let mut slots = Vec::with_capacity(problem.slots_per_day);
    let mut total_hours = 0.0;
    let mut difficulties = Vec::new();

    for (slot_idx, &gene) in chromosome.day_slots(problem, day).iter().enumerate() {
        let slot_label = SLOT_NAMES
            .get(slot_idx)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("Slot {slot_idx}"));

        let entry = match problem.course(gene) {
            Some(course) if gene != REST => {
                total_hours += HOURS_PER_SLOT;
                difficulties.push(f64::from(course.difficulty));
                course.name.clone()
            }
            _ => REST_LABEL.to_string(),
        };

        slots.push(SlotPlan {
            label: slot_label,
            entry,
        });
    }

    let avg_difficulty = if difficulties.is_empty() {
        0.0
    } else {
        difficulties.iter().sum::<f64>() / difficulties.len() as f64
    };
    let stress = fuzzy::stress(total_hours, avg_difficulty);

    DayPlan {
        label,
        slots,
        total_hours,
        avg_difficulty,
        stress,
        stress_label: StressLabel::from_value(stress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GaConfig;
    use crate::models::Course;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_problem() -> PlannerProblem {
        let courses = vec![
            Course::new(1, "AI Lab").with_difficulty(4).with_urgency(10),
            Course::new(2, "Database").with_difficulty(3).with_urgency(8),
        ];
        PlannerProblem::new(courses, 7, 3, 4.0)
    }

    #[test]
    fn test_decode_names_and_rest() {
        let problem = sample_problem();
        let mut genes = vec![REST; 21];
        genes[0] = 1; // Monday morning
        genes[4] = 2; // Tuesday afternoon
        let ch = Chromosome::from_genes(genes);

        let plan = WeekPlan::decode(&problem, &ch);
        assert_eq!(plan.days.len(), 7);

        let monday = plan.day("Monday").unwrap();
        assert_eq!(monday.slots[0].entry, "AI Lab");
        assert_eq!(monday.slots[1].entry, REST_LABEL);
        assert_eq!(monday.total_hours, 1.5);
        assert_eq!(monday.avg_difficulty, 4.0);

        let tuesday = plan.day("Tuesday").unwrap();
        assert_eq!(tuesday.slots[1].label, "Afternoon");
        assert_eq!(tuesday.slots[1].entry, "Database");
    }

    #[test]
    fn test_empty_day_summary() {
        let problem = sample_problem();
        let ch = Chromosome::from_genes(vec![REST; 21]);
        let plan = WeekPlan::decode(&problem, &ch);

        let sunday = plan.day("Sunday").unwrap();
        assert_eq!(sunday.total_hours, 0.0);
        assert_eq!(sunday.avg_difficulty, 0.0);
        // Zero hours at clamped difficulty 1 is a pure low-stress day.
        assert_eq!(sunday.stress_label, StressLabel::Low);
    }

    #[test]
    fn test_day_label_fallback() {
        let courses = vec![Course::new(1, "AI Lab")];
        let problem = PlannerProblem::new(courses, 10, 3, 4.0);
        let ch = Chromosome::from_genes(vec![REST; 30]);
        let plan = WeekPlan::decode(&problem, &ch);

        assert_eq!(plan.days[6].label, "Sunday");
        assert_eq!(plan.days[7].label, "Day 7");
        assert_eq!(plan.days[8].label, "Day 8");
        assert_eq!(plan.days[9].label, "Day 9");
    }

    #[test]
    fn test_slot_label_fallback() {
        let courses = vec![Course::new(1, "AI Lab")];
        let problem = PlannerProblem::new(courses, 7, 5, 6.0);
        let ch = Chromosome::from_genes(vec![REST; 35]);
        let plan = WeekPlan::decode(&problem, &ch);

        let labels: Vec<&str> = plan.days[0]
            .slots
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Morning", "Afternoon", "Evening", "Slot 3", "Slot 4"]
        );
    }

    #[test]
    fn test_end_to_end_decoded_run() {
        // 2 courses, 7 days × 3 slots, 4h cap, population 20,
        // 10 generations, fixed seed.
        let problem = sample_problem();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(10);
        let mut rng = SmallRng::seed_from_u64(42);

        let result = problem.evolve(&config, &mut rng);
        assert_eq!(result.history.len(), 10);

        let plan = WeekPlan::decode(&problem, &result.best);
        assert_eq!(plan.days.len(), 7);
        for day in &plan.days {
            assert_eq!(day.slots.len(), 3);
            assert!(day.total_hours <= 4.0);
            assert!((0.0..=1.0).contains(&day.stress));
        }
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let problem = sample_problem();
        let mut genes = vec![REST; 21];
        genes[0] = 1;
        let ch = Chromosome::from_genes(genes);
        let plan = WeekPlan::decode(&problem, &ch);

        let value = serde_json::to_value(&plan).unwrap();
        let monday = &value["days"][0];
        assert_eq!(monday["label"], "Monday");
        assert_eq!(monday["slots"][0]["entry"], "AI Lab");
        assert_eq!(monday["slots"][1]["entry"], "Rest");
        // 1.5h against a difficulty-4 course trips the time-pressure rule.
        assert_eq!(monday["stress_label"], "High");
        assert!(monday["total_hours"].is_number());
    }
}
