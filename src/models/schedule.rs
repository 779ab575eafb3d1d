//! Schedule (solution) model.
//!
//! A schedule is the outcome of one sequencing run: the jobs that won a
//! slot, in the order the scheduler placed them, together with the slot
//! each one occupies.
//!
//! # Ordering
//! Assignments are kept in *placement order* — the profit-descending order
//! in which the scheduler visited the jobs that were placed — not in slot
//! order. `job_in_slot` answers slot-oriented queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete solution to a job-sequencing problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed jobs, in placement order.
    pub assignments: Vec<Assignment>,
    /// Length of the slot array the scheduler worked with
    /// (`max(1, max_deadline)`; zero for empty input).
    pub slot_count: usize,
}

/// A job-to-slot assignment.
///
/// Profit is denormalized from the input job so the schedule can report
/// totals without a positional join back to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Scheduled job id.
    pub job_id: String,
    /// Profit of the scheduled job.
    pub profit: u64,
    /// 0-based slot index the job occupies. Always `< deadline`.
    pub slot: usize,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(job_id: impl Into<String>, profit: u64, slot: usize) -> Self {
        Self {
            job_id: job_id.into(),
            profit,
            slot,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Scheduled job ids in placement order.
    pub fn scheduled_ids(&self) -> Vec<&str> {
        self.assignments.iter().map(|a| a.job_id.as_str()).collect()
    }

    /// Total profit across all placed jobs.
    pub fn total_profit(&self) -> u64 {
        self.assignments.iter().map(|a| a.profit).sum()
    }

    /// Finds the first assignment for a given job id.
    ///
    /// With duplicate ids only the earliest-placed one is returned; use
    /// `assignments` directly for positional access.
    pub fn assignment_for_job(&self, job_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.job_id == job_id)
    }

    /// The job occupying a given slot, if any.
    pub fn job_in_slot(&self, slot: usize) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.slot == slot)
            .map(|a| a.job_id.as_str())
    }

    /// Number of placed jobs.
    pub fn scheduled_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no job was placed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Renders the placement sequence as an arrow-joined string
/// (`"J1 → J3 → J5"`), or `"No Jobs Scheduled"` when empty.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.assignments.is_empty() {
            return f.write_str("No Jobs Scheduled");
        }
        for (i, a) in self.assignments.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            f.write_str(&a.job_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule {
            assignments: Vec::new(),
            slot_count: 3,
        };
        s.add_assignment(Assignment::new("J1", 100, 1));
        s.add_assignment(Assignment::new("J3", 27, 0));
        s.add_assignment(Assignment::new("J5", 15, 2));
        s
    }

    #[test]
    fn test_scheduled_ids_in_placement_order() {
        let s = sample_schedule();
        assert_eq!(s.scheduled_ids(), ["J1", "J3", "J5"]);
    }

    #[test]
    fn test_total_profit() {
        let s = sample_schedule();
        assert_eq!(s.total_profit(), 142);
    }

    #[test]
    fn test_assignment_for_job() {
        let s = sample_schedule();
        let a = s.assignment_for_job("J3").unwrap();
        assert_eq!(a.slot, 0);
        assert!(s.assignment_for_job("J9").is_none());
    }

    #[test]
    fn test_job_in_slot() {
        let s = sample_schedule();
        assert_eq!(s.job_in_slot(0), Some("J3"));
        assert_eq!(s.job_in_slot(1), Some("J1"));
        assert_eq!(s.job_in_slot(2), Some("J5"));
        // slot_count bounds the array, but an unfilled slot is simply empty
        assert_eq!(s.job_in_slot(7), None);
    }

    #[test]
    fn test_display_arrow_joined() {
        let s = sample_schedule();
        assert_eq!(s.to_string(), "J1 → J3 → J5");
    }

    #[test]
    fn test_display_empty() {
        let s = Schedule::new();
        assert_eq!(s.to_string(), "No Jobs Scheduled");
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.scheduled_count(), 0);
        assert_eq!(s.total_profit(), 0);
        assert_eq!(s.slot_count, 0);
    }

    #[test]
    fn test_schedule_serde_roundtrip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
