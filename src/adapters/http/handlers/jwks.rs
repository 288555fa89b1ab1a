use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::state::AppState;

/// `GET /.well-known/jwks.json` (spec §6): publishes the ES256 verification
/// key. The signer computes and caches the body/ETag pair once for the
/// process lifetime (spec §9).
pub async fn jwks(State(state): State<AppState>) -> Response {
    let (body, etag) = state.signer.jwks_document();

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            (header::ETAG, etag),
        ],
        body,
    )
        .into_response()
}
