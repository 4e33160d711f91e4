//! HTTP Error Mapping
//!
//! Maps application errors to HTTP status codes.

use axum::http::StatusCode;
use waitline_core::error::AppError;

/// Messages returned for the collapsed not-found signals
pub mod message {
    pub const JOIN_NOT_FOUND_OR_INACTIVE: &str = "Queue not found or inactive";
    pub const QUEUE_NOT_FOUND: &str = "Queue not found";
    pub const QUEUE_EMPTY_OR_NOT_FOUND: &str = "Queue empty or not found";
}

/// Convert AppError to an HTTP status
pub fn status_code(err: &AppError) -> StatusCode {
    match err {
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::NotFound(_) | AppError::InactiveQueue(_) => StatusCode::NOT_FOUND,
        AppError::Conflict(_) => StatusCode::CONFLICT,
        AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_code(&AppError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_code(&AppError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_code(&AppError::InactiveQueue("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_code(&AppError::Conflict("x".into())),
            StatusCode::CONFLICT
        );
    }
}
