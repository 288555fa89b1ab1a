//! Baseline security headers applied to every response, HTML or JSON
//! (spec §4.9). Never overwrites a header a handler already set.

use axum::extract::Request;
use axum::http::{header, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

const FRAME_ANCESTORS_CSP: &str =
    "default-src 'self'; frame-ancestors 'none'; form-action 'self'; base-uri 'self'; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'";

fn set_if_absent(response: &mut Response, name: HeaderName, value: &'static str) {
    if !response.headers().contains_key(&name) {
        response.headers_mut().insert(name, HeaderValue::from_static(value));
    }
}

pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    set_if_absent(&mut response, HeaderName::from_static("x-frame-options"), "DENY");
    set_if_absent(&mut response, header::X_CONTENT_TYPE_OPTIONS, "nosniff");
    set_if_absent(&mut response, header::REFERRER_POLICY, "strict-origin-when-cross-origin");
    set_if_absent(
        &mut response,
        HeaderName::from_static("permissions-policy"),
        "camera=(), microphone=(), geolocation=(), payment=()",
    );

    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/html"))
        .unwrap_or(false);
    if is_html {
        set_if_absent(&mut response, header::CONTENT_SECURITY_POLICY, FRAME_ANCESTORS_CSP);
    }

    response
}
