use std::sync::Arc;

use crate::core::error::{CoreError, StateError, UnexpectedError};
use crate::core::federation::{NormalizedProfile, ProviderName};
use crate::core::identity::{Audience, User};
use crate::core::usecases::ports::{AuthStore, NewUser};
use crate::core::usecases::session_issuer::{IssueSessionRequest, IssuedSession, SessionIssuer};
use crate::core::usecases::ports::Clock;

pub struct OAuthCallbackInput {
    pub state: String,
    pub provider: ProviderName,
    pub profile: NormalizedProfile,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

pub struct OAuthCallbackOutput {
    pub session: IssuedSession,
    pub redirect_url: String,
}

/// Provider-agnostic user resolution and session mint (spec §4.7 steps 2,
/// 6, 7). Exchanging the code and parsing the provider's ID token or
/// profile response happens one layer up, in the provider-specific
/// adapter — by the time this runs, `profile` is already normalized and
/// its claims already validated.
pub struct OAuthCallback {
    store: Arc<dyn AuthStore>,
    clock: Arc<dyn Clock>,
    issuer: SessionIssuer,
}

impl OAuthCallback {
    pub fn new(store: Arc<dyn AuthStore>, clock: Arc<dyn Clock>, issuer: SessionIssuer) -> Self {
        Self { store, clock, issuer }
    }

    pub async fn execute(&self, input: OAuthCallbackInput) -> Result<OAuthCallbackOutput, CoreError> {
        let row = self
            .store
            .consume_federation_state(&input.state)
            .await?
            .ok_or(StateError::FederationStateInvalid)?;

        if row.provider != input.provider {
            return Err(StateError::FederationStateInvalid.into());
        }
        if row.is_expired(self.clock.now()) {
            return Err(StateError::FederationStateInvalid.into());
        }

        let user = self.resolve_user(&input.profile).await?;
        self.store.ensure_membership(&user.id, &row.tenant_id).await?;

        let redirect_origin = derive_origin(&row.redirect_url)?;
        let session = self
            .issuer
            .issue(IssueSessionRequest {
                user_id: user.id,
                tenant_id: row.tenant_id,
                redirect_origin,
                audience: Audience::Storefront,
                pkce_challenge: None,
                ip_address: input.ip_address,
                user_agent: input.user_agent,
            })
            .await?;

        Ok(OAuthCallbackOutput { session, redirect_url: row.redirect_url })
    }

    /// Spec §4.7 step 6, in order: link by provider account, link by
    /// verified email, split on unverified email, else create fresh.
    async fn resolve_user(&self, profile: &NormalizedProfile) -> Result<User, CoreError> {
        if let Some(link) = self.store.find_federated_identity(profile.provider, &profile.provider_account_id).await? {
            let user = self
                .store
                .find_user_by_id(&link.user_id)
                .await?
                .ok_or_else(|| UnexpectedError::new("federated identity referenced a nonexistent user"))?;
            return Ok(self.backfill(user, profile).await?);
        }

        if let Some(existing) = self.store.find_user_by_email(&profile.email).await? {
            if profile.email_verified {
                self.store.create_federated_identity(&existing.id, profile.provider, &profile.provider_account_id).await?;
                if !existing.email_verified {
                    self.store.mark_email_verified(&existing.id).await?;
                }
                return Ok(self.backfill(existing, profile).await?);
            }

            // Account-takeover defense: an unverified-email provider never
            // links into an existing account (spec §8 boundary behavior).
            let new_user = self.create_federated_user(profile).await?;
            return Ok(new_user);
        }

        self.create_federated_user(profile).await
    }

    async fn create_federated_user(&self, profile: &NormalizedProfile) -> Result<User, CoreError> {
        let new_user = self
            .store
            .create_user(NewUser {
                email: profile.email.clone(),
                email_verified: profile.email_verified,
                password_hash: None,
                display_name: profile.name.clone(),
                avatar_url: profile.avatar_url.clone(),
            })
            .await?;
        self.store.create_federated_identity(&new_user.id, profile.provider, &profile.provider_account_id).await?;
        Ok(new_user)
    }

    async fn backfill(&self, mut user: User, profile: &NormalizedProfile) -> Result<User, CoreError> {
        let name_backfill = user.display_name.trim().is_empty().then(|| profile.name.clone());
        let avatar_backfill = user.avatar_url.is_none().then(|| profile.avatar_url.clone()).flatten();

        if name_backfill.is_some() || avatar_backfill.is_some() {
            self.store.backfill_profile(&user.id, name_backfill.clone(), avatar_backfill.clone()).await?;
            if let Some(name) = name_backfill {
                user.display_name = name;
            }
            if let Some(avatar) = avatar_backfill {
                user.avatar_url = Some(avatar);
            }
        }

        Ok(user)
    }
}

fn derive_origin(redirect_url: &str) -> Result<String, CoreError> {
    let parsed = url::Url::parse(redirect_url)
        .map_err(|_| UnexpectedError::new("federation state redirect_url failed to reparse"))?;
    let port_suffix = parsed.port().map(|port| format!(":{port}")).unwrap_or_default();
    Ok(format!("{}://{}{}", parsed.scheme(), parsed.host_str().unwrap_or_default(), port_suffix))
}
