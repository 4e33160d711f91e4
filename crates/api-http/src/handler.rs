//! HTTP Route Handlers
//!
//! One handler per endpoint. Each translates the service result into the
//! status code and body shape its route promises.

use crate::error::{message, status_code};
use crate::types::{
    CreateQueueRequest, ErrorResponse, HealthResponse, JoinQueueRequest, JoinResponse,
    RemovePersonRequest, StatsResponse, SuccessResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use waitline_core::application::QueueService;
use waitline_core::domain::{Person, Queue};
use waitline_core::error::AppError;

/// Shared handler state with injected dependencies
#[derive(Clone)]
pub struct ApiState {
    service: Arc<QueueService>,
    start_time: Instant,
}

impl ApiState {
    pub fn new(service: Arc<QueueService>) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }
}

type ErrorReply<T> = (StatusCode, Json<T>);

/// POST /api/create_queue
///
/// A missing or malformed body is not an error: every field has a default.
pub async fn create_queue(
    State(state): State<ApiState>,
    payload: Result<Json<CreateQueueRequest>, JsonRejection>,
) -> Result<Json<Queue>, ErrorReply<ErrorResponse>> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Unreadable create body, using defaults");
            CreateQueueRequest::default()
        }
    };

    state
        .service
        .create(req)
        .await
        .map(Json)
        .map_err(|e| (status_code(&e), Json(ErrorResponse::new(e.to_string()))))
}

/// POST /api/join_queue
pub async fn join_queue(
    State(state): State<ApiState>,
    payload: Result<Json<JoinQueueRequest>, JsonRejection>,
) -> Result<Json<JoinResponse>, ErrorReply<JoinResponse>> {
    let Json(req) = payload
        .map_err(|rejection| join_failure(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    match state.service.join(req).await {
        Ok(person) => Ok(Json(JoinResponse {
            success: true,
            person: Some(person),
            error: None,
        })),
        Err(e) if e.is_not_found_or_inactive() => Err(join_failure(
            StatusCode::NOT_FOUND,
            message::JOIN_NOT_FOUND_OR_INACTIVE,
        )),
        Err(e) => Err(join_failure(status_code(&e), e.to_string())),
    }
}

fn join_failure(status: StatusCode, error: impl Into<String>) -> ErrorReply<JoinResponse> {
    (
        status,
        Json(JoinResponse {
            success: false,
            person: None,
            error: Some(error.into()),
        }),
    )
}

/// GET /api/get_queue/:queue_id
pub async fn get_queue(
    State(state): State<ApiState>,
    Path(queue_id): Path<String>,
) -> Result<Json<Queue>, ErrorReply<ErrorResponse>> {
    state.service.get(&queue_id).await.map(Json).map_err(|e| {
        (
            status_code(&e),
            Json(ErrorResponse::new(message::QUEUE_NOT_FOUND)),
        )
    })
}

/// POST /api/call_next/:queue_id
///
/// Preview only: the person stays at the head of the line.
pub async fn call_next(
    State(state): State<ApiState>,
    Path(queue_id): Path<String>,
) -> Result<Json<Person>, ErrorReply<ErrorResponse>> {
    state
        .service
        .peek_next(&queue_id)
        .await
        .map(Json)
        .map_err(|e| {
            (
                status_code(&e),
                Json(ErrorResponse::new(message::QUEUE_EMPTY_OR_NOT_FOUND)),
            )
        })
}

/// POST /api/remove_person
pub async fn remove_person(
    State(state): State<ApiState>,
    payload: Result<Json<RemovePersonRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ErrorReply<SuccessResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(SuccessResponse::rejected(rejection.body_text())),
        )
    })?;

    state
        .service
        .remove_person(req)
        .await
        .map(|()| Json(SuccessResponse::ok()))
        .map_err(success_failure)
}

/// POST /api/end_queue/:queue_id
pub async fn end_queue(
    State(state): State<ApiState>,
    Path(queue_id): Path<String>,
) -> Result<Json<SuccessResponse>, ErrorReply<SuccessResponse>> {
    state
        .service
        .deactivate(&queue_id)
        .await
        .map(|()| Json(SuccessResponse::ok()))
        .map_err(success_failure)
}

fn success_failure(err: AppError) -> ErrorReply<SuccessResponse> {
    let body = match &err {
        AppError::Validation(msg) => SuccessResponse::rejected(msg.clone()),
        _ => SuccessResponse::failed(),
    };
    (status_code(&err), Json(body))
}

/// GET /api/stats
pub async fn stats(
    State(state): State<ApiState>,
) -> Result<Json<StatsResponse>, ErrorReply<ErrorResponse>> {
    let registry = state
        .service
        .stats()
        .await
        .map_err(|e| (status_code(&e), Json(ErrorResponse::new(e.to_string()))))?;

    Ok(Json(StatsResponse {
        registry,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: waitline_core::VERSION,
    })
}
