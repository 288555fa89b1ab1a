//! Bearer access-token verification for `/api/memberships` (spec §4.8).

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::adapters::http::state::AppState;
use crate::core::token::AccessTokenClaims;

pub async fn bearer_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?
        .to_string();

    let claims: AccessTokenClaims = state.signer.verify(&token).map_err(|_| StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
