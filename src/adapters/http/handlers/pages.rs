use axum::extract::Query;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use std::collections::HashMap;

/// `GET /login`, `/register`, `/reset-password` (spec §6): these are HTML
/// pages owned by an external renderer in production. This service only
/// needs to answer the route at all — the `error`/`message` query
/// parameters it forwards are exactly what every other handler in this
/// module redirects back with.
fn page(title: &str, query: &HashMap<String, String>) -> Response {
    let notice = query
        .get("error")
        .map(|code| format!("<p class=\"error\">error: {code}</p>"))
        .or_else(|| query.get("message").map(|m| format!("<p class=\"message\">{m}</p>")))
        .unwrap_or_default();

    let body = format!(
        "<!doctype html><html><head><title>{title}</title></head><body><h1>{title}</h1>{notice}</body></html>"
    );
    ([(header::CACHE_CONTROL, "no-store")], Html(body)).into_response()
}

pub async fn login_page(Query(query): Query<HashMap<String, String>>) -> Response {
    page("Sign in", &query)
}

pub async fn register_page(Query(query): Query<HashMap<String, String>>) -> Response {
    page("Create account", &query)
}

pub async fn reset_password_page(Query(query): Query<HashMap<String, String>>) -> Response {
    page("Reset password", &query)
}
