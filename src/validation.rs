//! Input validation for job sequencing.
//!
//! Checks job well-formedness before scheduling. Detects:
//! - Blank job ids
//! - Zero deadlines (a job with deadline 0 can occupy no slot)
//!
//! Duplicate ids are deliberately *not* reported: the scheduler is
//! positional and treats same-id jobs as distinct entries.

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job has an empty (or whitespace-only) id.
    EmptyJobId,
    /// A job's deadline is zero.
    ZeroDeadline,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single job.
///
/// Returns the first problem found. Used by `SchedulingSession::add` to
/// reject malformed entries at the boundary.
pub fn validate_job(job: &Job) -> Result<(), ValidationError> {
    if job.id.trim().is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyJobId,
            "Job id must not be empty",
        ));
    }
    if job.deadline == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::ZeroDeadline,
            format!("Job '{}' has deadline 0; deadlines start at 1", job.id),
        ));
    }
    Ok(())
}

/// Validates a batch of jobs.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        if let Err(e) = validate_job(job) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_jobs() {
        let jobs = vec![Job::new("J1", 100, 2), Job::new("J2", 19, 1)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_empty_id() {
        let err = validate_job(&Job::new("", 10, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyJobId);

        let err = validate_job(&Job::new("   ", 10, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyJobId);
    }

    #[test]
    fn test_zero_deadline() {
        let err = validate_job(&Job::new("J1", 10, 0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::ZeroDeadline);
        assert!(err.message.contains("J1"));
    }

    #[test]
    fn test_duplicate_ids_are_legal() {
        let jobs = vec![Job::new("J", 10, 1), Job::new("J", 20, 2)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_zero_profit_is_legal() {
        assert!(validate_job(&Job::new("J1", 0, 1)).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let jobs = vec![
            Job::new("", 10, 1),
            Job::new("J1", 10, 0),
            Job::new("ok", 10, 1),
        ];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyJobId));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDeadline));
    }
}
