//! Scheduling session: incremental job accumulation.
//!
//! Owns the job list between `add`, `schedule`, and `reset` calls, replacing
//! ambient global state with an explicit value. Malformed jobs are rejected
//! at `add` time, so by the time the scheduler runs the input is well-formed.

use crate::models::{Job, Schedule};
use crate::scheduler::GreedyScheduler;
use crate::validation::{self, ValidationError};

/// An owned accumulator over jobs with add/schedule/reset semantics.
///
/// # Example
///
/// ```
/// use job_sequencing::models::Job;
/// use job_sequencing::session::SchedulingSession;
///
/// let mut session = SchedulingSession::new();
/// session.add(Job::new("A", 50, 1)).unwrap();
/// session.add(Job::new("B", 40, 1)).unwrap();
///
/// let schedule = session.schedule();
/// assert_eq!(schedule.to_string(), "A");
///
/// session.reset();
/// assert!(session.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingSession {
    jobs: Vec<Job>,
    scheduler: GreedyScheduler,
}

impl SchedulingSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job after validating it.
    ///
    /// Rejects blank ids and zero deadlines; a rejected job is not
    /// accumulated. Duplicate ids are accepted.
    pub fn add(&mut self, job: Job) -> Result<(), ValidationError> {
        validation::validate_job(&job)?;
        self.jobs.push(job);
        Ok(())
    }

    /// Runs the greedy scheduler over the accumulated jobs.
    ///
    /// Does not consume or reorder the accumulated list; calling twice
    /// yields the same schedule.
    pub fn schedule(&self) -> Schedule {
        self.scheduler.schedule(&self.jobs)
    }

    /// Discards all accumulated jobs.
    pub fn reset(&mut self) {
        self.jobs.clear();
    }

    /// The accumulated jobs, in insertion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Number of accumulated jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job has been added.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
