//! HTTP Request/Response Types
//!
//! Request bodies are the core use-case requests; only the envelopes that
//! wrap results live here.

use serde::Serialize;
use waitline_core::domain::Person;
use waitline_core::port::RegistryStats;

pub use waitline_core::application::{
    CreateQueueRequest, JoinQueueRequest, RemovePersonRequest,
};

/// `{error}` body for get / call_next / create failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{success}` body for remove_person / end_queue, with an error on bad input
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// join_queue body
#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub registry: RegistryStats,
    pub uptime_seconds: u64,
}
