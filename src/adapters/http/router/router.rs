//! Router assembly: route groups plus the global middleware stack (spec
//! §4.9) in application order — correlation tagging and timing happen
//! outermost so they wrap even a 429/500, security headers apply to
//! everything, then rate limiting, with tracing as the outermost layer
//! (mirrors the teacher's `TraceLayer::new_for_http()` placement).

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::adapters::http::middleware;
use crate::adapters::http::state::AppState;

use super::{api_routes, browser_routes, cors, oauth_routes, well_known_routes};

pub fn create_router(state: AppState) -> Router {
    let environment = state.config.environment;

    Router::new()
        .merge(well_known_routes())
        .merge(browser_routes())
        .merge(api_routes(state.clone()))
        .merge(oauth_routes())
        .layer(axum::middleware::from_fn_with_state(state.clone(), middleware::rate_limit))
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::correlation))
        .layer(cors::layer(environment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
