//! GA-based schedule optimization.
//!
//! Searches the space of weekly slot assignments with a generational
//! genetic algorithm: tournament selection, single-point crossover,
//! per-gene mutation, and blind random repair of capacity violations.
//! Fitness rewards course coverage and penalizes overload and fuzzy
//! stress (see [`crate::fuzzy`]).
//!
//! # Encoding
//!
//! A chromosome is a flat vector of length `days × slots_per_day` where
//! each gene is a course id or [`REST`] (0). Position `i` maps to day
//! `i / slots_per_day`, slot `i % slots_per_day`.
//!
//! # Submodules
//!
//! - [`operators`]: selection, crossover, and mutation primitives
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning"

mod chromosome;
pub mod operators;
mod optimizer;
mod problem;

pub use chromosome::{Chromosome, HOURS_PER_SLOT, REST};
pub use optimizer::{EvolutionResult, GaConfig, GenerationProgress};
pub use problem::PlannerProblem;
