//! Greedy job-sequencing scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort jobs by profit descending (ties keep input order).
//! 2. Allocate a slot array of length `max(1, max_deadline)`.
//! 3. For each job, scan from the latest feasible slot down to slot 0 and
//!    take the first free one; jobs that find no free slot are dropped.
//!
//! # Complexity
//! O(n log n + n * max_deadline) where n = job count.
//!
//! # Reference
//! Horowitz & Sahni (1978), "Fundamentals of Computer Algorithms", Ch. 4.4

use crate::models::{Assignment, Job, Schedule};

/// Greedy profit-descending scheduler for unit-time jobs with deadlines.
///
/// Provably optimal for this problem class. The input slice is never
/// mutated: ordering is computed on a private index permutation.
///
/// # Tie-breaking
/// Jobs with equal profit are visited in input order (stable sort), so the
/// earlier job wins a contested slot.
///
/// # Example
///
/// ```
/// use job_sequencing::models::Job;
/// use job_sequencing::scheduler::GreedyScheduler;
///
/// let jobs = vec![Job::new("A", 50, 1), Job::new("B", 40, 1)];
/// let schedule = GreedyScheduler::new().schedule(&jobs);
/// assert_eq!(schedule.scheduled_ids(), ["A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Sequences jobs into deadline-bounded slots.
    ///
    /// Returns assignments in placement order: the profit-descending order
    /// of the jobs that won a slot. Jobs with no free feasible slot are
    /// dropped. Empty input yields an empty schedule.
    pub fn schedule(&self, jobs: &[Job]) -> Schedule {
        if jobs.is_empty() {
            return Schedule::new();
        }

        let order = self.sort_jobs(jobs);

        let max_deadline = jobs.iter().map(|j| j.deadline).max().unwrap_or(0);
        let slot_count = (max_deadline as usize).max(1);
        let mut slots: Vec<Option<usize>> = vec![None; slot_count];

        let mut schedule = Schedule {
            assignments: Vec::new(),
            slot_count,
        };

        for &idx in &order {
            let job = &jobs[idx];
            let upper = (job.deadline as usize).min(slot_count);
            // Latest free slot no later than the deadline
            for slot in (0..upper).rev() {
                if slots[slot].is_none() {
                    slots[slot] = Some(idx);
                    schedule.add_assignment(Assignment::new(&job.id, job.profit, slot));
                    break;
                }
            }
        }

        schedule
    }

    /// Returns job indices stable-sorted by profit descending.
    fn sort_jobs(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| jobs[b].profit.cmp(&jobs[a].profit));
        indices
    }
}
