//! Checks run on form input before a request is sent.
//!
//! They mirror the server's quality-control rules and report every failed
//! rule, not just the first.

use thiserror::Error;

use crate::types::{FeedbackRequest, NewSubmission};

/// Minimum course code length after trimming.
pub const MIN_COURSE_LEN: usize = 2;
/// Accepted feedback ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Course code is shorter than [`MIN_COURSE_LEN`]
    #[error("Course code must be at least 2 characters")]
    CourseTooShort,

    /// No availability was selected
    #[error("At least one availability time block is required")]
    NoAvailability,

    /// An availability entry is blank
    #[error("Invalid availability block format")]
    BlankAvailability,

    /// The commitment box was not ticked
    #[error("Commitment confirmation is required")]
    CommitmentRequired,

    /// Rating outside [`RATING_RANGE`]
    #[error("Rating must be an integer between 1 and 5 (got {0})")]
    RatingOutOfRange(u8),
}

/// Every rule a form failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// The individual failures.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Trims and upper-cases a course code.
#[must_use]
pub fn normalize_course(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validates a join-group submission.
pub fn validate_submission(submission: &NewSubmission) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    let course = submission.course.trim();
    if course.is_empty() {
        errors.push(ValidationError::MissingField("course"));
    } else if course.chars().count() < MIN_COURSE_LEN {
        errors.push(ValidationError::CourseTooShort);
    }

    if submission.availability.is_empty() {
        errors.push(ValidationError::NoAvailability);
    } else if submission.availability.iter().any(|b| b.trim().is_empty()) {
        errors.push(ValidationError::BlankAvailability);
    }

    if !submission.commitment_confirmed {
        errors.push(ValidationError::CommitmentRequired);
    }

    ValidationErrors(errors).into_result()
}

/// Validates group feedback.
pub fn validate_feedback(feedback: &FeedbackRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if feedback.match_id.trim().is_empty() {
        errors.push(ValidationError::MissingField("match_id"));
    }
    if feedback.student_id.trim().is_empty() {
        errors.push(ValidationError::MissingField("student_id"));
    }
    if !RATING_RANGE.contains(&feedback.rating) {
        errors.push(ValidationError::RatingOutOfRange(feedback.rating));
    }

    ValidationErrors(errors).into_result()
}
