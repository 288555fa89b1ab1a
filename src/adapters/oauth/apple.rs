use crate::adapters::crypto::jwt::mint_apple_client_secret;
use crate::config::AppleCredentials;
use crate::core::federation::{NormalizedProfile, ProviderName};

use super::error::OAuthProviderError;
use super::exchange::exchange_code_for_tokens;
use super::google::build_authorize_url;
use super::id_token::{self, IssuerCheck};

const AUTH_URL: &str = "https://appleid.apple.com/auth/authorize";
const TOKEN_URL: &str = "https://appleid.apple.com/auth/token";
const ISSUER: &str = "https://appleid.apple.com";

/// Apple is the one provider whose client secret is not static: it is a
/// short-lived ES256 JWT this service mints per exchange from its own
/// provisioned key (spec §4.7 step 3), not a password stored anywhere.
pub struct AppleAdapter {
    credentials: AppleCredentials,
    redirect_uri: String,
    http: reqwest::Client,
}

impl AppleAdapter {
    pub fn new(credentials: AppleCredentials, redirect_uri: String, http: reqwest::Client) -> Self {
        Self { credentials, redirect_uri, http }
    }

    pub fn authorize_url(&self, state: &str, code_challenge: &str, nonce: Option<&str>) -> Result<String, OAuthProviderError> {
        build_authorize_url(
            &self.credentials.client_id,
            &self.redirect_uri,
            AUTH_URL,
            state,
            code_challenge,
            nonce,
            &["name", "email"],
            &[("response_mode", "form_post")],
        )
    }

    pub async fn exchange(
        &self,
        code: &str,
        code_verifier: &str,
        nonce: Option<&str>,
        now_unix: i64,
    ) -> Result<NormalizedProfile, OAuthProviderError> {
        let client_secret = mint_apple_client_secret(
            &self.credentials.team_id,
            &self.credentials.client_id,
            &self.credentials.key_id,
            &self.credentials.private_key_pem,
            now_unix,
        )
        .map_err(|e| OAuthProviderError::ExchangeFailed { reason: format!("failed to mint client secret: {e}") })?;

        let response = exchange_code_for_tokens(
            &self.http,
            TOKEN_URL,
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.redirect_uri),
                ("client_id", &self.credentials.client_id),
                ("client_secret", &client_secret),
                ("code_verifier", code_verifier),
            ],
        )
        .await?;

        let id_token = response
            .id_token
            .ok_or_else(|| OAuthProviderError::InvalidIdToken { reason: "no id_token in response".into() })?;

        let claims = id_token::decode_claims(&id_token)?;
        id_token::validate_claims(&claims, IssuerCheck::Exact(ISSUER), &self.credentials.client_id, nonce, now_unix)?;

        Ok(NormalizedProfile {
            provider: ProviderName::Apple,
            provider_account_id: claims.sub,
            email: claims.email.unwrap_or_default(),
            email_verified: claims.email_verified,
            // Apple sends name only in the one-time `user` form field on
            // first authorization, never in the ID token — the callback
            // handler backfills this from that field before normalizing.
            name: claims.name.unwrap_or_default(),
            avatar_url: claims.picture,
        })
    }
}
