//! In-memory fakes shared by the use-case test modules. Not built outside
//! `cfg(test)` — these stand in for `PgAuthStore` and the crypto adapters so
//! the session kernel can be exercised without a database or real keys.

#![cfg(test)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::credentials::StoredCredential;
use crate::core::error::CoreError;
use crate::core::federation::{FederationState, ProviderName};
use crate::core::identity::{FederatedIdentity, Role, TenantMembership, User};
use crate::core::token::{AccessTokenClaims, AuthorizationCode, PasswordResetToken, RefreshToken};
use crate::core::usecases::ports::{AuthStore, Clock, NewUser, PasswordHasher, TokenMinter, TokenSigner};

#[derive(Default)]
pub struct InMemoryAuthStore {
    users: Mutex<HashMap<String, User>>,
    memberships: Mutex<Vec<TenantMembership>>,
    federated_identities: Mutex<Vec<FederatedIdentity>>,
    auth_codes: Mutex<HashMap<String, AuthorizationCode>>,
    refresh_tokens: Mutex<HashMap<String, RefreshToken>>,
    federation_states: Mutex<HashMap<String, FederationState>>,
    password_reset_tokens: Mutex<HashMap<String, PasswordResetToken>>,
}

#[async_trait]
impl AuthStore for InMemoryAuthStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        Ok(self.users.lock().unwrap().values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, CoreError> {
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, CoreError> {
        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: new_user.email,
            email_verified: new_user.email_verified,
            password_hash: new_user.password_hash,
            display_name: new_user.display_name,
            avatar_url: new_user.avatar_url,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_password_hash(&self, user_id: &str, hash: StoredCredential) -> Result<(), CoreError> {
        if let Some(user) = self.users.lock().unwrap().get_mut(user_id) {
            user.password_hash = Some(hash);
        }
        Ok(())
    }

    async fn mark_email_verified(&self, user_id: &str) -> Result<(), CoreError> {
        if let Some(user) = self.users.lock().unwrap().get_mut(user_id) {
            user.email_verified = true;
        }
        Ok(())
    }

    async fn backfill_profile(
        &self,
        user_id: &str,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<(), CoreError> {
        if let Some(user) = self.users.lock().unwrap().get_mut(user_id) {
            if let Some(name) = display_name {
                user.display_name = name;
            }
            if avatar_url.is_some() {
                user.avatar_url = avatar_url;
            }
        }
        Ok(())
    }

    async fn ensure_membership(&self, user_id: &str, tenant_id: &str) -> Result<TenantMembership, CoreError> {
        let mut memberships = self.memberships.lock().unwrap();
        if let Some(existing) = memberships
            .iter()
            .find(|m| m.user_id == user_id && m.tenant_id == tenant_id && m.role == Role::Customer)
        {
            return Ok(existing.clone());
        }
        let membership = TenantMembership {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            tenant_id: tenant_id.to_string(),
            role: Role::Customer,
            status: crate::core::identity::MembershipStatus::Active,
            created_at: Utc::now(),
        };
        memberships.push(membership.clone());
        Ok(membership)
    }

    async fn list_memberships(&self, user_id: &str) -> Result<Vec<TenantMembership>, CoreError> {
        Ok(self.memberships.lock().unwrap().iter().filter(|m| m.user_id == user_id).cloned().collect())
    }

    async fn find_federated_identity(
        &self,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<Option<FederatedIdentity>, CoreError> {
        Ok(self
            .federated_identities
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.provider == provider.as_str() && f.provider_account_id == provider_account_id)
            .cloned())
    }

    async fn create_federated_identity(
        &self,
        user_id: &str,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<FederatedIdentity, CoreError> {
        let identity = FederatedIdentity {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            provider: provider.as_str().to_string(),
            provider_account_id: provider_account_id.to_string(),
            created_at: Utc::now(),
        };
        self.federated_identities.lock().unwrap().push(identity.clone());
        Ok(identity)
    }

    async fn insert_auth_code(&self, code: AuthorizationCode) -> Result<(), CoreError> {
        self.auth_codes.lock().unwrap().insert(code.code_hash.clone(), code);
        Ok(())
    }

    async fn consume_auth_code(&self, code_hash: &str) -> Result<Option<AuthorizationCode>, CoreError> {
        Ok(self.auth_codes.lock().unwrap().remove(code_hash))
    }

    async fn sweep_expired_auth_codes(&self) -> Result<u64, CoreError> {
        let now = Utc::now();
        let mut codes = self.auth_codes.lock().unwrap();
        let before = codes.len();
        codes.retain(|_, c| !c.is_expired(now));
        Ok((before - codes.len()) as u64)
    }

    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<(), CoreError> {
        self.refresh_tokens.lock().unwrap().insert(token.token_hash.clone(), token);
        Ok(())
    }

    async fn find_refresh_token_by_hash(&self, hash: &str) -> Result<Option<RefreshToken>, CoreError> {
        Ok(self.refresh_tokens.lock().unwrap().get(hash).cloned())
    }

    async fn rotate_refresh_token_if_active(
        &self,
        old_hash: &str,
        new_token: RefreshToken,
    ) -> Result<Option<RefreshToken>, CoreError> {
        let mut tokens = self.refresh_tokens.lock().unwrap();
        let still_active = matches!(tokens.get(old_hash), Some(t) if t.revoked_at.is_none());
        if !still_active {
            return Ok(None);
        }
        tokens.get_mut(old_hash).unwrap().revoked_at = Some(Utc::now());
        tokens.insert(new_token.token_hash.clone(), new_token.clone());
        Ok(Some(new_token))
    }

    async fn revoke_refresh_token(&self, hash: &str) -> Result<(), CoreError> {
        if let Some(token) = self.refresh_tokens.lock().unwrap().get_mut(hash) {
            token.revoked_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn revoke_refresh_token_family(&self, family_id: &str) -> Result<(), CoreError> {
        for token in self.refresh_tokens.lock().unwrap().values_mut() {
            if token.family_id == family_id {
                token.revoked_at = Some(Utc::now());
            }
        }
        Ok(())
    }

    async fn revoke_all_refresh_tokens_for_user(&self, user_id: &str) -> Result<(), CoreError> {
        for token in self.refresh_tokens.lock().unwrap().values_mut() {
            if token.user_id == user_id {
                token.revoked_at = Some(Utc::now());
            }
        }
        Ok(())
    }

    async fn insert_federation_state(&self, state: FederationState) -> Result<(), CoreError> {
        self.federation_states.lock().unwrap().insert(state.state.clone(), state);
        Ok(())
    }

    async fn find_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError> {
        Ok(self.federation_states.lock().unwrap().get(state).cloned())
    }

    async fn consume_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError> {
        Ok(self.federation_states.lock().unwrap().remove(state))
    }

    async fn sweep_expired_federation_states(&self) -> Result<u64, CoreError> {
        let now = Utc::now();
        let mut states = self.federation_states.lock().unwrap();
        let before = states.len();
        states.retain(|_, s| s.expires_at > now);
        Ok((before - states.len()) as u64)
    }

    async fn insert_password_reset_token(&self, token: PasswordResetToken) -> Result<(), CoreError> {
        self.password_reset_tokens.lock().unwrap().insert(token.token_hash.clone(), token);
        Ok(())
    }

    async fn consume_password_reset_token(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, CoreError> {
        let mut tokens = self.password_reset_tokens.lock().unwrap();
        match tokens.get_mut(token_hash) {
            Some(token) if token.used_at.is_none() => {
                token.used_at = Some(Utc::now());
                Ok(Some(token.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Plaintext-in, plaintext-out "hash" — good enough to exercise the use
/// cases' control flow without pulling PBKDF2 into a unit test.
#[derive(Default)]
pub struct PlaintextPasswordHasher;

impl PasswordHasher for PlaintextPasswordHasher {
    fn hash(&self, raw: &crate::core::credentials::RawCredential) -> StoredCredential {
        StoredCredential::from_hash(format!("plain:{}", raw.as_str()))
    }

    fn verify(&self, raw: &crate::core::credentials::RawCredential, stored: &StoredCredential) -> bool {
        stored.as_str() == format!("plain:{}", raw.as_str())
    }

    fn waste_cycles(&self, _raw: &crate::core::credentials::RawCredential) {}
}

#[derive(Default)]
pub struct CountingTokenMinter {
    counter: Mutex<u64>,
}

impl TokenMinter for CountingTokenMinter {
    fn random_hex(&self, _n_bytes: usize) -> String {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("hex-token-{counter}")
    }

    fn random_base64url(&self, _n_bytes: usize) -> String {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("b64-token-{counter}")
    }

    fn sha256_hex(&self, input: &str) -> String {
        format!("hash({input})")
    }

    fn pkce_challenge(&self, code_verifier: &str) -> String {
        format!("challenge({code_verifier})")
    }
}

/// Signs by serializing claims as JSON rather than a real JWS — the use
/// cases under test never inspect the token's wire format, only that
/// signing succeeds and round-trips through `verify`.
#[derive(Default)]
pub struct FakeTokenSigner;

impl TokenSigner for FakeTokenSigner {
    fn sign(&self, claims: &AccessTokenClaims) -> Result<String, CoreError> {
        Ok(serde_json::to_string(claims).unwrap())
    }

    fn verify(&self, compact: &str) -> Result<AccessTokenClaims, CoreError> {
        serde_json::from_str(compact)
            .map_err(|_| crate::core::error::AuthenticationError::InvalidAccessToken.into())
    }

    fn jwks_document(&self) -> (String, String) {
        ("{}".to_string(), "\"etag\"".to_string())
    }

    fn current_kid(&self) -> &str {
        "test-kid"
    }
}
