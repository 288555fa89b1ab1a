//! Per-IP, per-route fixed-window rate limiting (spec §4.9). Storage
//! failures fail open at the limiter implementation itself — this
//! middleware only decides what to do with the `bool` it gets back.

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;

use crate::adapters::http::state::AppState;

const WINDOW_SECONDS: i64 = 900;

fn client_key(request: &Request) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .or_else(|| request.extensions().get::<ConnectInfo<SocketAddr>>().map(|c| c.0.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit(State(state): State<AppState>, request: Request, next: Next) -> Result<Response, StatusCode> {
    let key = client_key(&request);
    let route = request.uri().path().to_string();
    let cap = state.config.rate_limit_cap();

    if !state.rate_limiter.check_and_record(&key, &route, cap, WINDOW_SECONDS) {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    Ok(next.run(request).await)
}
