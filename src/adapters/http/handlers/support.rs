//! Small request-shape helpers shared across handlers.

use axum::http::{header, HeaderMap};

use crate::core::identity::Audience;

pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
}

pub fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// Unrecognized or absent audience values default to `storefront` — only an
/// explicit, well-formed `audience=admin` opts into the admin claim shape
/// (spec §4.5, §8 scenario 6).
pub fn audience_or_default(raw: Option<String>) -> Audience {
    raw.and_then(|v| v.parse().ok()).unwrap_or_default()
}
