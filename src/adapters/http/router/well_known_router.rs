use axum::routing::get;
use axum::Router;

use crate::adapters::http::{handlers, state::AppState};

pub fn well_known_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/.well-known/jwks.json", get(handlers::jwks::jwks))
}
