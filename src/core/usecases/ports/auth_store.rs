use async_trait::async_trait;

use crate::core::credentials::StoredCredential;
use crate::core::error::CoreError;
use crate::core::federation::{FederationState, ProviderName};
use crate::core::identity::{FederatedIdentity, TenantMembership, User};
use crate::core::token::{AuthorizationCode, PasswordResetToken, RefreshToken};

/// Fields needed to create a user row; kept separate from [`User`] because
/// `id`/`created_at`/`updated_at` are assigned by the store, not the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub email_verified: bool,
    pub password_hash: Option<StoredCredential>,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// Thin typed surface over the seven entity tables (spec §4.2).
///
/// Every mutating method that the spec calls out as needing atomicity
/// (`consume_*`, `rotate_refresh_token_if_active`) is a single statement at
/// the implementation, never a read followed by a separate write — this is
/// the port-level contract that closes the source's read-then-delete race
/// (spec §9 open question).
#[async_trait]
pub trait AuthStore: Send + Sync {
    // -- users --
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError>;
    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, CoreError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, CoreError>;
    async fn update_password_hash(&self, user_id: &str, hash: StoredCredential) -> Result<(), CoreError>;
    async fn mark_email_verified(&self, user_id: &str) -> Result<(), CoreError>;
    async fn backfill_profile(
        &self,
        user_id: &str,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<(), CoreError>;

    // -- tenant memberships --
    /// Inserts a `customer`/`active` row; no-op on a `(user_id, tenant_id,
    /// role)` conflict. Never touches `status` of an existing row (spec §9
    /// open question resolution).
    async fn ensure_membership(&self, user_id: &str, tenant_id: &str) -> Result<TenantMembership, CoreError>;
    async fn list_memberships(&self, user_id: &str) -> Result<Vec<TenantMembership>, CoreError>;

    // -- federated identities --
    async fn find_federated_identity(
        &self,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<Option<FederatedIdentity>, CoreError>;
    async fn create_federated_identity(
        &self,
        user_id: &str,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<FederatedIdentity, CoreError>;

    // -- authorization codes --
    async fn insert_auth_code(&self, code: AuthorizationCode) -> Result<(), CoreError>;
    /// Atomic `DELETE ... RETURNING`; the row is gone whether or not the
    /// caller goes on to accept it.
    async fn consume_auth_code(&self, code_hash: &str) -> Result<Option<AuthorizationCode>, CoreError>;
    async fn sweep_expired_auth_codes(&self) -> Result<u64, CoreError>;

    // -- refresh tokens --
    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<(), CoreError>;
    async fn find_refresh_token_by_hash(&self, hash: &str) -> Result<Option<RefreshToken>, CoreError>;
    /// Conditional `UPDATE ... WHERE revoked_at IS NULL RETURNING` followed
    /// by the sibling `INSERT`, both inside one transaction. Returns `None`
    /// when `old_hash` was already revoked or missing at the moment of the
    /// update — the race-safety primitive spec §5 requires.
    async fn rotate_refresh_token_if_active(
        &self,
        old_hash: &str,
        new_token: RefreshToken,
    ) -> Result<Option<RefreshToken>, CoreError>;
    /// Revokes the single row with this hash — used by `/api/logout`, which
    /// must not disturb sibling tokens in the same family.
    async fn revoke_refresh_token(&self, hash: &str) -> Result<(), CoreError>;
    async fn revoke_refresh_token_family(&self, family_id: &str) -> Result<(), CoreError>;
    async fn revoke_all_refresh_tokens_for_user(&self, user_id: &str) -> Result<(), CoreError>;

    // -- federation flow state --
    async fn insert_federation_state(&self, state: FederationState) -> Result<(), CoreError>;
    /// Non-destructive lookup: the HTTP callback needs `code_verifier`/`nonce`
    /// to exchange the code with the provider before the use case's atomic
    /// consume-and-validate runs (spec §4.7 steps 2-3).
    async fn find_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError>;
    async fn consume_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError>;
    async fn sweep_expired_federation_states(&self) -> Result<u64, CoreError>;

    // -- password reset tokens --
    async fn insert_password_reset_token(&self, token: PasswordResetToken) -> Result<(), CoreError>;
    /// Atomic `UPDATE ... SET used_at = now() WHERE used_at IS NULL
    /// RETURNING`; a subsequent read never finds the row unused.
    async fn consume_password_reset_token(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, CoreError>;

    /// Liveness probe for `/health` — a trivial round trip, not a query
    /// against any of the seven tables.
    async fn ping(&self) -> Result<(), CoreError>;
}
