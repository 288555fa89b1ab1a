use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::usecases::ports::{AuthStore, TokenMinter};

pub struct RevokeSessionInput {
    pub presented_refresh_token: String,
}

/// `POST /api/logout` / `POST /api/logout-all` (spec §4.8). Revoking an
/// unknown or already-revoked token is not an error — logout is idempotent
/// from the caller's perspective.
pub struct RevokeSession {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
}

impl RevokeSession {
    pub fn new(store: Arc<dyn AuthStore>, minter: Arc<dyn TokenMinter>) -> Self {
        Self { store, minter }
    }

    /// Revokes only the presented token, leaving sibling family members intact.
    pub async fn logout(&self, input: RevokeSessionInput) -> Result<(), CoreError> {
        let hash = self.minter.sha256_hex(&input.presented_refresh_token);
        self.store.revoke_refresh_token(&hash).await
    }

    /// Revokes the presented token, then every other refresh token the user holds.
    pub async fn logout_all(&self, input: RevokeSessionInput) -> Result<(), CoreError> {
        let hash = self.minter.sha256_hex(&input.presented_refresh_token);
        if let Some(token) = self.store.find_refresh_token_by_hash(&hash).await? {
            self.store.revoke_all_refresh_tokens_for_user(&token.user_id).await?;
        } else {
            self.store.revoke_refresh_token(&hash).await?;
        }
        Ok(())
    }
}
