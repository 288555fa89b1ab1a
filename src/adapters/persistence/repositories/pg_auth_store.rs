use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::adapters::persistence::database::Database;
use crate::adapters::persistence::error::PersistenceError;
use crate::adapters::persistence::models::{
    AuthorizationCodeRow, FederatedIdentityRow, FederationStateRow, PasswordResetTokenRow, RefreshTokenRow,
    TenantMembershipRow, UserRow,
};
use crate::core::credentials::StoredCredential;
use crate::core::error::{CoreError, DependencyError, StateError, UnexpectedError};
use crate::core::federation::{FederationState, ProviderName};
use crate::core::identity::{FederatedIdentity, TenantMembership, User};
use crate::core::token::{AuthorizationCode, PasswordResetToken, RefreshToken};
use crate::core::usecases::ports::{AuthStore, NewUser};

/// `AuthStore` backed by a Postgres pool, holding the seven tables.
///
/// Every method here maps a `sqlx::Error` into `PersistenceError` and then
/// into `CoreError::Dependency` — a data-store failure always fails closed
/// (spec §7). The one exception is a unique-email violation on
/// `create_user`, which surfaces as `CoreError::State` because it is a
/// legitimate outcome of a concurrent registration race, not an outage.
pub struct PgAuthStore {
    db: Database,
}

impl PgAuthStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn parse_uuid(value: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(value).map_err(|_| UnexpectedError::new(format!("expected a UUID, got {value}")).into())
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        CoreError::Dependency(DependencyError::DataStoreUnavailable { reason: err.to_string() })
    }
}

#[async_trait]
impl AuthStore for PgAuthStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(row.map(User::from))
    }

    async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>, CoreError> {
        let id = parse_uuid(user_id)?;
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(row.map(User::from))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, CoreError> {
        let row: UserRow = sqlx::query_as(
            "INSERT INTO users (id, email, email_verified, password_hash, display_name, avatar_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, now(), now())
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&new_user.email)
        .bind(new_user.email_verified)
        .bind(new_user.password_hash.as_ref().map(StoredCredential::as_str))
        .bind(&new_user.display_name)
        .bind(&new_user.avatar_url)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match PersistenceError::from(e) {
            PersistenceError::UniqueViolation { .. } => CoreError::State(StateError::EmailAlreadyRegistered),
            other => other.into(),
        })?;

        Ok(User::from(row))
    }

    async fn update_password_hash(&self, user_id: &str, hash: StoredCredential) -> Result<(), CoreError> {
        let id = parse_uuid(user_id)?;
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(hash.as_str())
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn mark_email_verified(&self, user_id: &str) -> Result<(), CoreError> {
        let id = parse_uuid(user_id)?;
        sqlx::query("UPDATE users SET email_verified = true, updated_at = now() WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn backfill_profile(
        &self,
        user_id: &str,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<(), CoreError> {
        let id = parse_uuid(user_id)?;
        sqlx::query(
            "UPDATE users SET
                display_name = COALESCE($2, display_name),
                avatar_url = COALESCE($3, avatar_url),
                updated_at = now()
             WHERE id = $1",
        )
        .bind(id)
        .bind(display_name)
        .bind(avatar_url)
        .execute(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn ensure_membership(&self, user_id: &str, tenant_id: &str) -> Result<TenantMembership, CoreError> {
        let id = parse_uuid(user_id)?;
        let inserted: Option<TenantMembershipRow> = sqlx::query_as(
            "INSERT INTO tenant_memberships (id, user_id, tenant_id, role, status, created_at)
             VALUES ($1, $2, $3, 'customer', 'active', now())
             ON CONFLICT (user_id, tenant_id, role) DO NOTHING
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;

        if let Some(row) = inserted {
            return Ok(row.into_domain());
        }

        let existing: TenantMembershipRow = sqlx::query_as(
            "SELECT * FROM tenant_memberships WHERE user_id = $1 AND tenant_id = $2 AND role = 'customer'",
        )
        .bind(id)
        .bind(tenant_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;

        Ok(existing.into_domain())
    }

    async fn list_memberships(&self, user_id: &str) -> Result<Vec<TenantMembership>, CoreError> {
        let id = parse_uuid(user_id)?;
        let rows: Vec<TenantMembershipRow> = sqlx::query_as(
            "SELECT * FROM tenant_memberships WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;

        Ok(rows.into_iter().map(TenantMembershipRow::into_domain).collect())
    }

    async fn find_federated_identity(
        &self,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<Option<FederatedIdentity>, CoreError> {
        let row: Option<FederatedIdentityRow> = sqlx::query_as(
            "SELECT * FROM federated_identities WHERE provider = $1 AND provider_account_id = $2",
        )
        .bind(provider.as_str())
        .bind(provider_account_id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;

        Ok(row.map(FederatedIdentity::from))
    }

    async fn create_federated_identity(
        &self,
        user_id: &str,
        provider: ProviderName,
        provider_account_id: &str,
    ) -> Result<FederatedIdentity, CoreError> {
        let id = parse_uuid(user_id)?;
        let row: FederatedIdentityRow = sqlx::query_as(
            "INSERT INTO federated_identities (id, user_id, provider, provider_account_id, created_at)
             VALUES ($1, $2, $3, $4, now())
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(id)
        .bind(provider.as_str())
        .bind(provider_account_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;

        Ok(row.into())
    }

    async fn insert_auth_code(&self, code: AuthorizationCode) -> Result<(), CoreError> {
        let user_id = parse_uuid(&code.user_id)?;
        sqlx::query(
            "INSERT INTO authorization_codes
                (code_hash, user_id, tenant_id, redirect_origin, audience, pkce_challenge, expires_at, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&code.code_hash)
        .bind(user_id)
        .bind(&code.tenant_id)
        .bind(&code.redirect_origin)
        .bind(code.audience.as_str())
        .bind(&code.pkce_challenge)
        .bind(code.expires_at)
        .bind(code.created_at)
        .execute(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn consume_auth_code(&self, code_hash: &str) -> Result<Option<AuthorizationCode>, CoreError> {
        let row: Option<AuthorizationCodeRow> =
            sqlx::query_as("DELETE FROM authorization_codes WHERE code_hash = $1 RETURNING *")
                .bind(code_hash)
                .fetch_optional(self.db.pool())
                .await
                .map_err(PersistenceError::from)?;
        Ok(row.map(AuthorizationCode::from))
    }

    async fn sweep_expired_auth_codes(&self) -> Result<u64, CoreError> {
        let result = sqlx::query("DELETE FROM authorization_codes WHERE expires_at <= now()")
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(result.rows_affected())
    }

    async fn insert_refresh_token(&self, token: RefreshToken) -> Result<(), CoreError> {
        let id = parse_uuid(&token.id)?;
        let user_id = parse_uuid(&token.user_id)?;
        let family_id = parse_uuid(&token.family_id)?;
        sqlx::query(
            "INSERT INTO refresh_tokens
                (id, user_id, token_hash, family_id, expires_at, revoked_at, last_used_at, created_at, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(id)
        .bind(user_id)
        .bind(&token.token_hash)
        .bind(family_id)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .bind(token.last_used_at)
        .bind(token.created_at)
        .bind(&token.ip_address)
        .bind(&token.user_agent)
        .execute(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn find_refresh_token_by_hash(&self, hash: &str) -> Result<Option<RefreshToken>, CoreError> {
        let row: Option<RefreshTokenRow> = sqlx::query_as("SELECT * FROM refresh_tokens WHERE token_hash = $1")
            .bind(hash)
            .fetch_optional(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(row.map(RefreshToken::from))
    }

    async fn rotate_refresh_token_if_active(
        &self,
        old_hash: &str,
        new_token: RefreshToken,
    ) -> Result<Option<RefreshToken>, CoreError> {
        let mut tx = self.db.pool().begin().await.map_err(|e| PersistenceError::from(e))?;

        let revoked: Option<RefreshTokenRow> = sqlx::query_as(
            "UPDATE refresh_tokens SET revoked_at = now()
             WHERE token_hash = $1 AND revoked_at IS NULL
             RETURNING *",
        )
        .bind(old_hash)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| PersistenceError::from(e))?;

        if revoked.is_none() {
            tx.rollback().await.map_err(|e| PersistenceError::from(e))?;
            return Ok(None);
        }

        let id = parse_uuid(&new_token.id)?;
        let user_id = parse_uuid(&new_token.user_id)?;
        let family_id = parse_uuid(&new_token.family_id)?;
        let inserted: RefreshTokenRow = sqlx::query_as(
            "INSERT INTO refresh_tokens
                (id, user_id, token_hash, family_id, expires_at, revoked_at, last_used_at, created_at, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, NULL, NULL, $6, $7, $8)
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&new_token.token_hash)
        .bind(family_id)
        .bind(new_token.expires_at)
        .bind(new_token.created_at)
        .bind(&new_token.ip_address)
        .bind(&new_token.user_agent)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| PersistenceError::from(e))?;

        tx.commit().await.map_err(|e| PersistenceError::from(e))?;

        Ok(Some(RefreshToken::from(inserted)))
    }

    async fn revoke_refresh_token(&self, hash: &str) -> Result<(), CoreError> {
        sqlx::query("UPDATE refresh_tokens SET revoked_at = now() WHERE token_hash = $1 AND revoked_at IS NULL")
            .bind(hash)
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn revoke_refresh_token_family(&self, family_id: &str) -> Result<(), CoreError> {
        let id = parse_uuid(family_id)?;
        sqlx::query("UPDATE refresh_tokens SET revoked_at = now() WHERE family_id = $1 AND revoked_at IS NULL")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn revoke_all_refresh_tokens_for_user(&self, user_id: &str) -> Result<(), CoreError> {
        let id = parse_uuid(user_id)?;
        sqlx::query("UPDATE refresh_tokens SET revoked_at = now() WHERE user_id = $1 AND revoked_at IS NULL")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn insert_federation_state(&self, state: FederationState) -> Result<(), CoreError> {
        sqlx::query(
            "INSERT INTO federation_states (state, tenant_id, redirect_url, code_verifier, nonce, provider, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&state.state)
        .bind(&state.tenant_id)
        .bind(&state.redirect_url)
        .bind(&state.code_verifier)
        .bind(&state.nonce)
        .bind(state.provider.as_str())
        .bind(state.expires_at)
        .execute(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn find_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError> {
        let row: Option<FederationStateRow> = sqlx::query_as("SELECT * FROM federation_states WHERE state = $1")
            .bind(state)
            .fetch_optional(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(row.map(FederationState::from))
    }

    async fn consume_federation_state(&self, state: &str) -> Result<Option<FederationState>, CoreError> {
        let row: Option<FederationStateRow> =
            sqlx::query_as("DELETE FROM federation_states WHERE state = $1 RETURNING *")
                .bind(state)
                .fetch_optional(self.db.pool())
                .await
                .map_err(PersistenceError::from)?;
        Ok(row.map(FederationState::from))
    }

    async fn sweep_expired_federation_states(&self) -> Result<u64, CoreError> {
        let result = sqlx::query("DELETE FROM federation_states WHERE expires_at <= now()")
            .execute(self.db.pool())
            .await
            .map_err(PersistenceError::from)?;
        Ok(result.rows_affected())
    }

    async fn insert_password_reset_token(&self, token: PasswordResetToken) -> Result<(), CoreError> {
        let user_id = parse_uuid(&token.user_id)?;
        sqlx::query(
            "INSERT INTO password_reset_tokens (token_hash, user_id, expires_at, used_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&token.token_hash)
        .bind(user_id)
        .bind(token.expires_at)
        .bind(token.used_at)
        .execute(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(())
    }

    async fn consume_password_reset_token(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, CoreError> {
        let row: Option<PasswordResetTokenRow> = sqlx::query_as(
            "UPDATE password_reset_tokens SET used_at = $2
             WHERE token_hash = $1 AND used_at IS NULL
             RETURNING *",
        )
        .bind(token_hash)
        .bind(Utc::now())
        .fetch_optional(self.db.pool())
        .await
        .map_err(PersistenceError::from)?;
        Ok(row.map(PasswordResetToken::from))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        sqlx::query("SELECT 1").execute(self.db.pool()).await.map_err(PersistenceError::from)?;
        Ok(())
    }
}
