//! Schedule quality metrics.
//!
//! Computes solution quality numbers from a completed schedule and the
//! input jobs it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | Sum of profits of placed jobs |
//! | Scheduled Count | Jobs that won a slot |
//! | Dropped Count | Jobs that found no free feasible slot |
//! | Dropped Profit | Profit left unscheduled |
//! | Slot Utilization | Filled slots / slot array length |
//!
//! All counts and sums are positional, so inputs with duplicate job ids
//! are handled correctly.

use crate::models::{Job, Schedule};

/// Quality indicators for one sequencing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Total profit of placed jobs.
    pub total_profit: u64,
    /// Number of jobs placed.
    pub scheduled_count: usize,
    /// Number of input jobs that were dropped.
    pub dropped_count: usize,
    /// Profit of dropped jobs (input total minus scheduled total).
    pub dropped_profit: u64,
    /// Fraction of the slot array that is filled (0.0..=1.0; 0.0 for an
    /// empty schedule).
    pub slot_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and the jobs it was built from.
    ///
    /// # Arguments
    /// * `schedule` - Output of `GreedyScheduler::schedule`.
    /// * `jobs` - The exact input slice that produced `schedule`.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let total_profit = schedule.total_profit();
        let input_profit: u64 = jobs.iter().map(|j| j.profit).sum();
        let scheduled_count = schedule.scheduled_count();

        let slot_utilization = if schedule.slot_count == 0 {
            0.0
        } else {
            scheduled_count as f64 / schedule.slot_count as f64
        };

        Self {
            total_profit,
            scheduled_count,
            dropped_count: jobs.len().saturating_sub(scheduled_count),
            dropped_profit: input_profit.saturating_sub(total_profit),
            slot_utilization,
        }
    }
}
