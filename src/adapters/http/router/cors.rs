//! CORS policy (spec §4.9): preflights are checked against the same
//! controlled-suffix list the redirect validator uses; unknown origins get
//! no `Access-Control-Allow-Origin` at all, never a blanket `*`.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::config::Environment;
use crate::core::redirect::matches_controlled_suffix;

pub fn layer(environment: Environment) -> CorsLayer {
    CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::list([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION]))
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            is_allowed_origin(origin, environment)
        }))
}

fn is_allowed_origin(origin: &HeaderValue, environment: Environment) -> bool {
    let Ok(origin) = origin.to_str() else { return false };
    let Ok(url) = url::Url::parse(origin) else { return false };
    let Some(host) = url.host_str() else { return false };

    if matches_controlled_suffix(host) {
        return true;
    }
    !environment.is_production() && matches!(host, "localhost" | "127.0.0.1")
}
