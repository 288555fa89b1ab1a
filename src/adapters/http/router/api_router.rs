//! The two JSON-answering endpoints (spec §4.8). `/api/memberships` alone
//! carries the bearer-auth layer.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::{handlers, middleware, state::AppState};

pub fn api_routes(state: AppState) -> Router<AppState> {
    let memberships = Router::new()
        .route("/api/memberships", get(handlers::memberships::memberships))
        .layer(axum::middleware::from_fn_with_state(state, middleware::bearer_auth));

    Router::new().route("/api/token", post(handlers::token::token)).merge(memberships)
}
