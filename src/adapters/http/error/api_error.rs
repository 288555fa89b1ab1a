use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core::error::CoreError;

use super::codes::{error_code, is_fail_closed};

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// JSON error shape for the two endpoints that answer with a body rather
/// than a redirect: `/api/token` and `/api/memberships` (spec §6).
#[derive(Debug, Clone)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized,
    Internal,
}

impl ApiError {
    /// `/api/token`: any kernel rejection is 400; a data-store failure
    /// fails closed as 500 (spec §4.8, §7).
    pub fn from_token_kernel(err: CoreError) -> Self {
        if is_fail_closed(&err) {
            tracing::error!(target: "auth.internal", error = %err, "token exchange dependency failure");
            ApiError::Internal
        } else {
            ApiError::BadRequest(error_code(&err).to_string())
        }
    }

    /// `/api/memberships`: bearer verification failure is 401; anything
    /// else fails closed as 500.
    pub fn from_bearer_lookup(err: CoreError) -> Self {
        match err {
            CoreError::Authentication(_) => ApiError::Unauthorized,
            other => {
                tracing::error!(target: "auth.internal", error = %other, "memberships lookup failure");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(code) => {
                (StatusCode::BAD_REQUEST, Json(ApiErrorBody { error: code })).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorBody { error: "invalid_credentials".to_string() }),
            )
                .into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorBody { error: "Internal server error".to_string() }),
            )
                .into_response(),
        }
    }
}
