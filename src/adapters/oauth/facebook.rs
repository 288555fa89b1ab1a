use serde::Deserialize;

use crate::config::OAuthClientCredentials;
use crate::core::federation::{NormalizedProfile, ProviderName};

use super::error::OAuthProviderError;
use super::exchange::exchange_code_for_tokens;
use super::google::build_authorize_url;

const AUTH_URL: &str = "https://www.facebook.com/v19.0/dialog/oauth";
const TOKEN_URL: &str = "https://graph.facebook.com/v19.0/oauth/access_token";
const PROFILE_URL: &str = "https://graph.facebook.com/v19.0/me";

/// Facebook is the one provider with no OIDC support (spec §4.7): it
/// exposes no ID token, only an access token redeemable at the Graph API
/// profile endpoint.
pub struct FacebookAdapter {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GraphProfile {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    picture: Option<GraphPicture>,
}

#[derive(Debug, Deserialize)]
struct GraphPicture {
    data: GraphPictureData,
}

#[derive(Debug, Deserialize)]
struct GraphPictureData {
    url: Option<String>,
}

impl FacebookAdapter {
    pub fn new(credentials: OAuthClientCredentials, redirect_uri: String, http: reqwest::Client) -> Self {
        Self { client_id: credentials.client_id, client_secret: credentials.client_secret, redirect_uri, http }
    }

    pub fn authorize_url(&self, state: &str, code_challenge: &str) -> Result<String, OAuthProviderError> {
        build_authorize_url(
            &self.client_id,
            &self.redirect_uri,
            AUTH_URL,
            state,
            code_challenge,
            None,
            &["email", "public_profile"],
            &[],
        )
    }

    pub async fn exchange(&self, code: &str, code_verifier: &str) -> Result<NormalizedProfile, OAuthProviderError> {
        let tokens = exchange_code_for_tokens(
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

        let access_token = tokens
            .access_token
            .ok_or_else(|| OAuthProviderError::ExchangeFailed { reason: "no access_token in response".into() })?;

        let response = self
            .http
            .get(PROFILE_URL)
            .query(&[("fields", "id,name,email,picture"), ("access_token", &access_token)])
            .send()
            .await
            .map_err(|e| OAuthProviderError::ProfileFetchFailed { reason: e.to_string() })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(OAuthProviderError::ProfileFetchFailed { reason: format!("graph returned {status}: {body}") });
        }

        let profile: GraphProfile = serde_json::from_str(&body)
            .map_err(|e| OAuthProviderError::ProfileFetchFailed { reason: format!("unparseable profile: {e}") })?;

        // Graph's `email` field is only ever returned for an already-verified
        // address; an account without a verified email simply omits it.
        let email_verified = profile.email.is_some();

        Ok(NormalizedProfile {
            provider: ProviderName::Facebook,
            provider_account_id: profile.id,
            email: profile.email.unwrap_or_default(),
            email_verified,
            name: profile.name.unwrap_or_default(),
            avatar_url: profile.picture.and_then(|p| p.data.url),
        })
    }
}
