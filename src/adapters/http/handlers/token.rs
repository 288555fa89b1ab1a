use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::dto::{TokenRequest, TokenResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::core::usecases::{ExchangeCode, ExchangeCodeInput};

/// `POST /api/token` (spec §4.8, §6). The only token-issuing endpoint that
/// answers with JSON rather than a redirect — it's called server-to-server
/// by the storefront backend, not by a browser.
pub async fn token(State(state): State<AppState>, Json(body): Json<TokenRequest>) -> Response {
    let use_case = ExchangeCode::new(
        state.store.clone(),
        state.minter.clone(),
        state.signer.clone(),
        state.clock.clone(),
        state.session_policy,
        state.config.auth_origin(),
    );

    let input = ExchangeCodeInput {
        code: body.code,
        tenant_id: body.tenant_id,
        redirect_origin: body.redirect_origin,
        code_verifier: body.code_verifier,
    };

    match use_case.execute(input).await {
        Ok(output) => (
            [(header::CACHE_CONTROL, "no-store")],
            Json(TokenResponse {
                access_token: output.access_token,
                token_type: "Bearer",
                expires_in: output.expires_in,
            }),
        )
            .into_response(),
        Err(err) => ApiError::from_token_kernel(err).into_response(),
    }
}
