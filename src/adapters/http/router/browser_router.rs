//! HTML pages and the redirect-reporting form endpoints (spec §6).

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::{handlers, state::AppState};

pub fn browser_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::pages::login_page))
        .route("/register", get(handlers::pages::register_page))
        .route("/reset-password", get(handlers::pages::reset_password_page))
        .route("/api/register", post(handlers::register::register))
        .route("/api/login", post(handlers::login::login))
        .route("/api/refresh", get(handlers::refresh::refresh))
        .route("/api/logout", post(handlers::logout::logout))
        .route("/api/logout-all", post(handlers::logout::logout_all))
        .route("/api/forgot-password", post(handlers::forgot_password::forgot_password))
        .route("/api/reset-password", post(handlers::reset_password::reset_password))
}
