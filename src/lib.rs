//! Fuzzy-GA weekly study planner.
//!
//! Generates a weekly study schedule that balances three competing goals:
//! covering every course, staying under a daily workload cap, and keeping a
//! fuzzy-logic stress signal low. A genetic algorithm searches the space of
//! slot assignments; the fuzzy stress model scores each candidate day inside
//! the fitness function.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`
//! - **`fuzzy`**: Fuzzy stress inference (Mamdani-style rules, weighted-centroid
//!   defuzzification)
//! - **`ga`**: Chromosome encoding, genetic operators, evolution loop
//! - **`report`**: Decoding of chromosomes into a readable weekly plan
//! - **`validation`**: Boundary checks on courses and planner parameters
//!
//! # References
//!
//! - Mamdani & Assilian (1975), "An Experiment in Linguistic Synthesis with a
//!   Fuzzy Logic Controller"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine
//!   Learning"

pub mod fuzzy;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

pub use fuzzy::{stress, StressLabel};
pub use ga::{Chromosome, EvolutionResult, GaConfig, GenerationProgress, PlannerProblem};
pub use models::Course;
pub use report::WeekPlan;
