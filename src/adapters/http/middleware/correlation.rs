//! Correlation-id tagging and basic request timing (spec §4.9).

use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

static CORRELATION_HEADER_CANDIDATES: [&str; 2] = ["x-correlation-id", "x-request-id"];

/// A request-scoped correlation id, threaded through handlers via request
/// extensions and echoed back on every response as `x-trace-id`.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

pub async fn correlation(mut request: Request, next: Next) -> Response {
    let correlation_id = CORRELATION_HEADER_CANDIDATES
        .iter()
        .find_map(|name| request.headers().get(*name).and_then(|v| v.to_str().ok()).map(str::to_string))
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(CorrelationId(correlation_id.clone()));

    let start = Instant::now();
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response.headers_mut().insert(HeaderName::from_static("x-trace-id"), value);
    }
    let elapsed_ms = start.elapsed().as_millis();
    if let Ok(value) = HeaderValue::from_str(&format!("total;dur={elapsed_ms}")) {
        response.headers_mut().insert(HeaderName::from_static("server-timing"), value);
    }

    response
}
