//! Domain models for deadline-constrained job sequencing.
//!
//! Provides the core data types for stating a job-sequencing problem
//! and its solution. A `Job` is a unit-time piece of work with a profit
//! and a deadline; a `Schedule` records which jobs won a slot and where.

mod job;
mod schedule;

pub use job::Job;
pub use schedule::{Assignment, Schedule};
