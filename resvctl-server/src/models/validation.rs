//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject `value` if it has more than `max` characters.
pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
