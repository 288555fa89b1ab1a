//! Raw token-endpoint POST, shared by every provider.
//!
//! `oauth2`'s typed `TokenResponse` does not surface `id_token` (an OIDC
//! extension its base `BasicTokenType` knows nothing about), so the
//! exchange itself goes through a plain form POST and a loosely-typed
//! response instead of the crate's typestate client.

use serde::Deserialize;

use super::error::OAuthProviderError;

#[derive(Debug, Deserialize)]
pub struct TokenEndpointResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

pub async fn exchange_code_for_tokens(
    http: &reqwest::Client,
    token_url: &str,
    params: &[(&str, &str)],
) -> Result<TokenEndpointResponse, OAuthProviderError> {
    let response = http
        .post(token_url)
        .form(params)
        .send()
        .await
        .map_err(|e| OAuthProviderError::ExchangeFailed { reason: e.to_string() })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        return Err(OAuthProviderError::ExchangeFailed { reason: format!("provider returned {status}: {body}") });
    }

    serde_json::from_str(&body)
        .map_err(|e| OAuthProviderError::ExchangeFailed { reason: format!("unparseable token response: {e}") })
}
