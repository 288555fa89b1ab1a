use oauth2::{AuthUrl, ClientId, CsrfToken, RedirectUrl, Scope};

use crate::config::OAuthClientCredentials;
use crate::core::federation::NormalizedProfile;
use crate::core::federation::ProviderName;

use super::error::OAuthProviderError;
use super::exchange::exchange_code_for_tokens;
use super::id_token::{self, IssuerCheck};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const ISSUER: &str = "https://accounts.google.com";

pub struct GoogleAdapter {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: reqwest::Client,
}

impl GoogleAdapter {
    pub fn new(credentials: OAuthClientCredentials, redirect_uri: String, http: reqwest::Client) -> Self {
        Self { client_id: credentials.client_id, client_secret: credentials.client_secret, redirect_uri, http }
    }

    pub fn authorize_url(&self, state: &str, code_challenge: &str, nonce: Option<&str>) -> Result<String, OAuthProviderError> {
        build_authorize_url(
            &self.client_id,
            &self.redirect_uri,
            AUTH_URL,
            state,
            code_challenge,
            nonce,
            &["openid", "email", "profile"],
            &[],
        )
    }

    pub async fn exchange(
        &self,
        code: &str,
        code_verifier: &str,
        nonce: Option<&str>,
        now_unix: i64,
    ) -> Result<NormalizedProfile, OAuthProviderError> {
        let response = exchange_code_for_tokens(
            &self.http,
            TOKEN_URL,
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.redirect_uri),
                ("client_id", &self.client_id),
                ("client_secret", &self.client_secret),
                ("code_verifier", code_verifier),
            ],
        )
        .await?;

        let id_token = response
            .id_token
            .ok_or_else(|| OAuthProviderError::InvalidIdToken { reason: "no id_token in response".into() })?;

        let claims = id_token::decode_claims(&id_token)?;
        id_token::validate_claims(&claims, IssuerCheck::Exact(ISSUER), &self.client_id, nonce, now_unix)?;

        Ok(NormalizedProfile {
            provider: ProviderName::Google,
            provider_account_id: claims.sub,
            email: claims.email.unwrap_or_default(),
            email_verified: claims.email_verified,
            name: claims.name.unwrap_or_default(),
            avatar_url: claims.picture,
        })
    }
}

/// Shared by Google/Microsoft/Apple — all three build a standard
/// authorization-code-with-PKCE URL, differing only in endpoint, scopes,
/// and extra params (Apple's `response_mode=form_post`).
pub fn build_authorize_url(
    client_id: &str,
    redirect_uri: &str,
    auth_url: &str,
    state: &str,
    code_challenge: &str,
    nonce: Option<&str>,
    scopes: &[&str],
    extra_params: &[(&str, &str)],
) -> Result<String, OAuthProviderError> {
    let client = oauth2::basic::BasicClient::new(ClientId::new(client_id.to_string()))
        .set_auth_uri(AuthUrl::new(auth_url.to_string()).map_err(config_error)?)
        .set_redirect_uri(RedirectUrl::new(redirect_uri.to_string()).map_err(config_error)?);

    let state = state.to_string();
    let mut request = client
        .authorize_url(|| CsrfToken::new(state))
        .add_scopes(scopes.iter().map(|s| Scope::new(s.to_string())))
        .add_extra_param("code_challenge", code_challenge.to_string())
        .add_extra_param("code_challenge_method", "S256");

    if let Some(nonce) = nonce {
        request = request.add_extra_param("nonce", nonce.to_string());
    }
    for (key, value) in extra_params {
        request = request.add_extra_param(key.to_string(), value.to_string());
    }

    let (url, _csrf) = request.url();
    Ok(url.to_string())
}

fn config_error(e: impl std::fmt::Display) -> OAuthProviderError {
    OAuthProviderError::ExchangeFailed { reason: format!("invalid provider endpoint configuration: {e}") }
}
