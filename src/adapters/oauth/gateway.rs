use crate::config::AppConfig;
use crate::core::federation::{NormalizedProfile, ProviderName};

use super::apple::AppleAdapter;
use super::error::OAuthProviderError;
use super::facebook::FacebookAdapter;
use super::google::GoogleAdapter;
use super::microsoft::MicrosoftAdapter;

/// Dispatches to one of the four provider adapters, each built once at
/// startup from whichever credentials were present in the environment.
/// A provider with no credentials is simply absent here — callers check
/// with [`FederationGateway::is_configured`] before initiation (spec §4.7
/// step 1).
pub struct FederationGateway {
    google: Option<GoogleAdapter>,
    facebook: Option<FacebookAdapter>,
    apple: Option<AppleAdapter>,
    microsoft: Option<MicrosoftAdapter>,
}

impl FederationGateway {
    pub fn new(config: &AppConfig) -> Self {
        let http = super::http_client::build();

        let google = config.oauth.google.clone().map(|creds| {
            GoogleAdapter::new(creds, config.oauth_callback_url("google"), http.clone())
        });
        let facebook = config.oauth.facebook.clone().map(|creds| {
            FacebookAdapter::new(creds, config.oauth_callback_url("facebook"), http.clone())
        });
        let microsoft = config.oauth.microsoft.clone().map(|creds| {
            MicrosoftAdapter::new(creds, config.oauth_callback_url("microsoft"), http.clone())
        });
        let apple = config.oauth.apple.clone().map(|creds| {
            AppleAdapter::new(creds, config.oauth_callback_url("apple"), http.clone())
        });

        Self { google, facebook, apple, microsoft }
    }

    pub fn is_configured(&self, provider: ProviderName) -> bool {
        match provider {
            ProviderName::Google => self.google.is_some(),
            ProviderName::Facebook => self.facebook.is_some(),
            ProviderName::Apple => self.apple.is_some(),
            ProviderName::Microsoft => self.microsoft.is_some(),
        }
    }

    pub fn authorize_url(
        &self,
        provider: ProviderName,
        state: &str,
        code_challenge: &str,
        nonce: Option<&str>,
    ) -> Result<String, OAuthProviderError> {
        match provider {
            ProviderName::Google => {
                self.google.as_ref().ok_or(OAuthProviderError::NotConfigured)?.authorize_url(state, code_challenge, nonce)
            }
            ProviderName::Facebook => {
                self.facebook.as_ref().ok_or(OAuthProviderError::NotConfigured)?.authorize_url(state, code_challenge)
            }
            ProviderName::Apple => {
                self.apple.as_ref().ok_or(OAuthProviderError::NotConfigured)?.authorize_url(state, code_challenge, nonce)
            }
            ProviderName::Microsoft => self
                .microsoft
                .as_ref()
                .ok_or(OAuthProviderError::NotConfigured)?
                .authorize_url(state, code_challenge, nonce),
        }
    }

    pub async fn exchange(
        &self,
        provider: ProviderName,
        code: &str,
        code_verifier: &str,
        nonce: Option<&str>,
        now_unix: i64,
    ) -> Result<NormalizedProfile, OAuthProviderError> {
        match provider {
            ProviderName::Google => {
                self.google.as_ref().ok_or(OAuthProviderError::NotConfigured)?.exchange(code, code_verifier, nonce, now_unix).await
            }
            ProviderName::Facebook => {
                self.facebook.as_ref().ok_or(OAuthProviderError::NotConfigured)?.exchange(code, code_verifier).await
            }
            ProviderName::Apple => {
                self.apple.as_ref().ok_or(OAuthProviderError::NotConfigured)?.exchange(code, code_verifier, nonce, now_unix).await
            }
            ProviderName::Microsoft => {
                self.microsoft
                    .as_ref()
                    .ok_or(OAuthProviderError::NotConfigured)?
                    .exchange(code, code_verifier, nonce, now_unix)
                    .await
            }
        }
    }
}
