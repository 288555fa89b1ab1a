use std::sync::Arc;

use crate::core::credentials::{CredentialPolicy, RawCredential};
use crate::core::error::{CoreError, StateError, UnexpectedError, ValidationError};
use crate::core::usecases::ports::{AuthStore, Clock, PasswordHasher, TokenMinter};

pub struct ResetPasswordInput {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub struct ResetPasswordOutput {
    pub email: String,
}

pub struct ResetPassword {
    store: Arc<dyn AuthStore>,
    hasher: Arc<dyn PasswordHasher>,
    minter: Arc<dyn TokenMinter>,
    clock: Arc<dyn Clock>,
    credential_policy: CredentialPolicy,
}

impl ResetPassword {
    pub fn new(
        store: Arc<dyn AuthStore>,
        hasher: Arc<dyn PasswordHasher>,
        minter: Arc<dyn TokenMinter>,
        clock: Arc<dyn Clock>,
        credential_policy: CredentialPolicy,
    ) -> Self {
        Self { store, hasher, minter, clock, credential_policy }
    }

    /// Order follows spec §4.6 "Reset password" exactly: presence, strength,
    /// confirmation, atomic consume, expiry, update, then the mandatory
    /// session wipe (revoke every refresh token of that user).
    pub async fn execute(&self, input: ResetPasswordInput) -> Result<ResetPasswordOutput, CoreError> {
        if input.token.trim().is_empty() {
            return Err(StateError::ResetTokenInvalid.into());
        }

        let raw_password = RawCredential::new(input.new_password);
        raw_password.validate(&self.credential_policy)?;

        if raw_password.as_str() != input.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let token_hash = self.minter.sha256_hex(&input.token);
        let row = self
            .store
            .consume_password_reset_token(&token_hash)
            .await?
            .ok_or(StateError::ResetTokenInvalid)?;

        if row.expires_at <= self.clock.now() {
            return Err(StateError::ResetTokenInvalid.into());
        }

        let new_hash = self.hasher.hash(&raw_password);
        self.store.update_password_hash(&row.user_id, new_hash).await?;
        self.store.revoke_all_refresh_tokens_for_user(&row.user_id).await?;

        let user = self
            .store
            .find_user_by_id(&row.user_id)
            .await?
            .ok_or_else(|| UnexpectedError::new("password reset token referenced a nonexistent user"))?;

        Ok(ResetPasswordOutput { email: user.email })
    }
}
