use crate::config::OAuthClientCredentials;
use crate::core::federation::{NormalizedProfile, ProviderName};

use super::error::OAuthProviderError;
use super::exchange::exchange_code_for_tokens;
use super::google::build_authorize_url;
use super::id_token::{self, IssuerCheck};

const AUTH_URL: &str = "https://login.microsoftonline.com/common/oauth2/v2.0/authorize";
const TOKEN_URL: &str = "https://login.microsoftonline.com/common/oauth2/v2.0/token";

pub struct MicrosoftAdapter {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: reqwest::Client,
}

impl MicrosoftAdapter {
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
        id_token::validate_claims(&claims, IssuerCheck::MicrosoftTenantIssuer, &self.client_id, nonce, now_unix)?;

        Ok(NormalizedProfile {
            provider: ProviderName::Microsoft,
            provider_account_id: claims.sub,
            email: claims.email.unwrap_or_default(),
            email_verified: claims.email_verified,
            name: claims.name.unwrap_or_default(),
            avatar_url: claims.picture,
        })
    }
}
