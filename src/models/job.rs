//! Job model.
//!
//! A job is a single-unit-time piece of work with a profit and a deadline.
//! Profit is unsigned, so the "non-negative profit" precondition is carried
//! by the type; positive deadlines are checked by the `validation` module.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use serde::{Deserialize, Serialize};

/// A unit-time job to be sequenced.
///
/// Occupies exactly one slot when scheduled. With 0-based slot indices, a
/// job with deadline `d` may occupy any slot in `0..d`.
///
/// Ids need not be unique: the scheduler treats jobs positionally and never
/// deduplicates, so two jobs sharing an id are two distinct jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier (not required to be unique).
    pub id: String,
    /// Profit earned if the job is scheduled.
    pub profit: u64,
    /// Latest slot count by which the job must complete (1-based, exclusive
    /// upper bound on usable slot indices).
    pub deadline: u32,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, profit: u64, deadline: u32) -> Self {
        Self {
            id: id.into(),
            profit,
            deadline,
        }
    }

    /// Highest 0-based slot index this job may occupy.
    ///
    /// `None` for a zero deadline (malformed, rejected by validation).
    pub fn latest_slot(&self) -> Option<usize> {
        (self.deadline as usize).checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new("J1", 100, 2);
        assert_eq!(job.id, "J1");
        assert_eq!(job.profit, 100);
        assert_eq!(job.deadline, 2);
    }

    #[test]
    fn test_latest_slot() {
        assert_eq!(Job::new("J1", 10, 1).latest_slot(), Some(0));
        assert_eq!(Job::new("J2", 10, 5).latest_slot(), Some(4));
        assert_eq!(Job::new("bad", 10, 0).latest_slot(), None);
    }

    #[test]
    fn test_job_serde_roundtrip() {
        let job = Job::new("J1", 100, 2);
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
