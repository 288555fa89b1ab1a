use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::adapters::http::cookies::{clear_refresh_cookie, REFRESH_COOKIE_NAME};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::core::usecases::{RevokeSession, RevokeSessionInput};

#[derive(Serialize)]
struct LogoutResponse {
    success: bool,
}

fn cleared(state: &AppState) -> Response {
    let mut response = (StatusCode::OK, Json(LogoutResponse { success: true })).into_response();
    let cookie = clear_refresh_cookie(&state.config);
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

/// `POST /api/logout` (spec §4.8). Idempotent: a missing or already-revoked
/// cookie still answers `{success:true}` with the cookie cleared.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = jar.get(REFRESH_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return cleared(&state);
    };

    let use_case = RevokeSession::new(state.store.clone(), state.minter.clone());
    match use_case.logout(RevokeSessionInput { presented_refresh_token: token }).await {
        Ok(()) => cleared(&state),
        Err(err) => ApiError::from_token_kernel(err).into_response(),
    }
}

/// `POST /api/logout-all` (spec §4.8). Revokes the caller's refresh-token
/// family and every other refresh token the same user holds.
pub async fn logout_all(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = jar.get(REFRESH_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return cleared(&state);
    };

    let use_case = RevokeSession::new(state.store.clone(), state.minter.clone());
    match use_case.logout_all(RevokeSessionInput { presented_refresh_token: token }).await {
        Ok(()) => cleared(&state),
        Err(err) => ApiError::from_token_kernel(err).into_response(),
    }
}
