use std::sync::Arc;

use crate::core::error::{CoreError, StateError};
use crate::core::identity::Audience;
use crate::core::token::{AuthorizationCode, IssuedAuthorizationCode, IssuedRefreshToken, RefreshToken};
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuthStore, Clock, TokenMinter};

pub struct RefreshSessionInput {
    pub presented_refresh_token: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: Audience,
}

#[derive(Debug)]
pub struct RefreshSessionOutput {
    pub user_id: String,
    pub refresh_token: IssuedRefreshToken,
    pub auth_code: IssuedAuthorizationCode,
}

/// Token kernel rotation with reuse detection (spec §4.4 steps 1-5, §5's
/// "update-if-not-revoked" race property, spec §8 scenario 3).
pub struct RefreshSession {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
}

impl RefreshSession {
    pub fn new(store: Arc<dyn AuthStore>, minter: Arc<dyn TokenMinter>, clock: Arc<dyn Clock>, policy: SessionPolicy) -> Self {
        Self { store, minter, clock, policy }
    }

    pub async fn execute(&self, input: RefreshSessionInput) -> Result<RefreshSessionOutput, CoreError> {
        let now = self.clock.now();
        let old_hash = self.minter.sha256_hex(&input.presented_refresh_token);

        let existing = self
            .store
            .find_refresh_token_by_hash(&old_hash)
            .await?
            .ok_or(StateError::SessionExpired)?;

        if existing.is_revoked() {
            // Reuse detected: a second presentation of an already-rotated
            // token is treated as compromise (spec glossary: "Reuse detection").
            self.store.revoke_refresh_token_family(&existing.family_id).await?;
            return Err(StateError::SessionExpired.into());
        }

        if existing.is_expired(now) {
            return Err(StateError::SessionExpired.into());
        }

        let new_plaintext = self.minter.random_hex(32);
        let new_expires_at = now + self.policy.refresh_token_ttl();
        let new_row = RefreshToken {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: existing.user_id.clone(),
            token_hash: self.minter.sha256_hex(&new_plaintext),
            family_id: existing.family_id.clone(),
            expires_at: new_expires_at,
            revoked_at: None,
            last_used_at: None,
            created_at: now,
            ip_address: existing.ip_address.clone(),
            user_agent: existing.user_agent.clone(),
        };

        let rotated = self.store.rotate_refresh_token_if_active(&old_hash, new_row).await?;

        let Some(_rotated_row) = rotated else {
            // Revoked between the lookup above and the conditional update:
            // another caller won the race. Same reuse-detection response.
            self.store.revoke_refresh_token_family(&existing.family_id).await?;
            return Err(StateError::SessionExpired.into());
        };

        let code_plaintext = self.minter.random_hex(32);
        let code_expires_at = now + self.policy.auth_code_ttl();
        self.store
            .insert_auth_code(AuthorizationCode {
                code_hash: self.minter.sha256_hex(&code_plaintext),
                user_id: existing.user_id.clone(),
                tenant_id: input.tenant_id,
                redirect_origin: input.redirect_origin,
                audience: input.audience,
                pkce_challenge: None,
                expires_at: code_expires_at,
                created_at: now,
            })
            .await?;

        Ok(RefreshSessionOutput {
            user_id: existing.user_id,
            refresh_token: IssuedRefreshToken { plaintext: new_plaintext, family_id: existing.family_id, expires_at: new_expires_at },
            auth_code: IssuedAuthorizationCode { plaintext: code_plaintext, expires_at: code_expires_at },
        })
    }
}
