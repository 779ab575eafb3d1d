//! Greedy job sequencing and schedule metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` implements the classical job-sequencing-with-deadlines
//! procedure: visit jobs in descending profit order and place each into the
//! latest free slot at or before its deadline. Optimal for single-unit-time
//! deadline-constrained sequencing.
//!
//! # Metrics
//!
//! `ScheduleMetrics` computes solution quality numbers: total profit,
//! scheduled/dropped counts, profit left unscheduled, slot utilization.
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4

mod greedy;
mod metrics;

pub use greedy::GreedyScheduler;
pub use metrics::ScheduleMetrics;
