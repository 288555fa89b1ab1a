use std::time::Instant;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::dto::health::Subsystems;
use crate::adapters::http::dto::HealthResponse;
use crate::adapters::http::middleware::CorrelationId;
use crate::adapters::http::state::AppState;
use crate::config::Environment;

fn env_label(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => "development",
        Environment::Staging => "staging",
        Environment::Production => "production",
    }
}

/// `GET /health` (spec §6): liveness plus a data-store round trip.
pub async fn health(State(state): State<AppState>, axum::Extension(correlation): axum::Extension<CorrelationId>) -> Response {
    let start = Instant::now();
    let database = match state.store.ping().await {
        Ok(()) => "ok",
        Err(_) => "unavailable",
    };

    let body = HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        env: env_label(state.config.environment),
        deployed_at: state.clock.now().to_rfc3339(),
        subsystems: Subsystems { database },
        duration_ms: start.elapsed().as_millis(),
        correlation_id: correlation.0,
    };

    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(body),
    )
        .into_response()
}
