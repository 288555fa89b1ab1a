//! Federation initiation and callback (spec §4.7).

use axum::routing::get;
use axum::Router;

use crate::adapters::http::{handlers, state::AppState};

pub fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/oauth/{provider}", get(handlers::oauth::initiate))
        .route("/oauth/{provider}/callback", get(handlers::oauth::callback_get).post(handlers::oauth::callback_post))
}
