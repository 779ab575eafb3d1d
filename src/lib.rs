//! Greedy job sequencing with deadlines.
//!
//! Assigns a subset of single-unit-time jobs, each carrying a profit and a
//! deadline, to discrete time slots so that total profit is maximized. A job
//! may only occupy a slot at or before its deadline, and each slot holds at
//! most one job. The greedy procedure (process jobs by descending profit,
//! place each into the latest free feasible slot) is provably optimal for
//! this problem.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Schedule`, `Assignment`
//! - **`scheduler`**: `GreedyScheduler` and `ScheduleMetrics`
//! - **`session`**: `SchedulingSession` — incremental add/schedule/reset
//! - **`validation`**: Input integrity checks (blank ids, zero deadlines)
//!
//! # Example
//!
//! ```
//! use job_sequencing::models::Job;
//! use job_sequencing::scheduler::GreedyScheduler;
//!
//! let jobs = vec![
//!     Job::new("J1", 100, 2),
//!     Job::new("J2", 19, 1),
//!     Job::new("J3", 27, 2),
//! ];
//! let schedule = GreedyScheduler::new().schedule(&jobs);
//! assert_eq!(schedule.scheduled_ids(), ["J1", "J3"]);
//! assert_eq!(schedule.total_profit(), 127);
//! ```
//!
//! # References
//!
//! - Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4 (Greedy Algorithms)

pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;
