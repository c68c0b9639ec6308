//! Planner domain models.
//!
//! The planning horizon is abstract: days are ordinal positions (no calendar
//! dates), each day is divided into fixed-duration study slots, and each slot
//! holds at most one course.

mod course;

pub use course::Course;
