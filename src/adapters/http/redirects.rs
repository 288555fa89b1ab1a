//! Redirect-response helpers shared by every browser-facing handler.
//!
//! Register, login, forgot/reset-password, refresh, and the OAuth flows all
//! report failure by 302ing back to the originating page with `?error=` or
//! `?message=` rather than a JSON body (spec §6).

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::core::error::CoreError;

use super::error::{error_code, is_fail_closed, ApiError};

fn append_query(base: &str, key: &str, value: &str) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{key}={value}")
}

pub fn redirect_to(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub fn redirect_with_error_code(base: &str, code: &str) -> Response {
    redirect_to(&append_query(base, "error", code))
}

pub fn redirect_with_message(base: &str, message: &str) -> Response {
    redirect_to(&append_query(base, "message", message))
}

/// Projects a `CoreError` the way every redirect-based handler must: a
/// user-correctable failure becomes `?error=<code>` on `fallback_base`, but
/// a fail-closed dependency/unexpected failure escalates to a 500 JSON body
/// instead of silently redirecting past it (spec §7).
pub fn project_redirect_failure(fallback_base: &str, err: CoreError) -> Response {
    if is_fail_closed(&err) {
        tracing::error!(target: "auth.internal", error = %err, "dependency failure on redirect path");
        ApiError::Internal.into_response()
    } else {
        redirect_with_error_code(fallback_base, error_code(&err))
    }
}
