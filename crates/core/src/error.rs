// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Queue is inactive: {0}")]
    InactiveQueue(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Domain errors are lifted into the matching application variant
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::QueueInactive(id) => AppError::InactiveQueue(id),
            DomainError::DuplicatePerson(id) => {
                AppError::Conflict(format!("Person {} already queued", id))
            }
        }
    }
}

impl AppError {
    /// True for the two failures a join collapses into "not found or inactive"
    pub fn is_not_found_or_inactive(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::InactiveQueue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_inactive_maps_to_inactive_queue() {
        let err: AppError = DomainError::QueueInactive("abc12345".to_string()).into();
        assert!(matches!(err, AppError::InactiveQueue(ref id) if id == "abc12345"));
        assert!(err.is_not_found_or_inactive());
    }

    #[test]
    fn test_domain_duplicate_maps_to_conflict() {
        let err: AppError = DomainError::DuplicatePerson("p1".to_string()).into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(!err.is_not_found_or_inactive());
    }
}
