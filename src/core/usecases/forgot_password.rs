use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::User;
use crate::core::token::{IssuedPasswordResetToken, PasswordResetToken};
use crate::core::usecases::policies::SessionPolicy;
use crate::core::usecases::ports::{AuthStore, Clock, TokenMinter};

pub struct ForgotPasswordInput {
    pub email: String,
}

/// `Some` only when a matching user exists — the handler must still emit
/// the identical `message=reset_sent` redirect either way (spec §4.6
/// enumeration-resistance invariant, spec §8 scenario 4).
pub struct ForgotPasswordOutcome {
    pub issued: Option<(User, IssuedPasswordResetToken)>,
}

pub struct ForgotPassword {
    store: Arc<dyn AuthStore>,
    minter: Arc<dyn TokenMinter>,
    clock: Arc<dyn Clock>,
    policy: SessionPolicy,
}

impl ForgotPassword {
    pub fn new(store: Arc<dyn AuthStore>, minter: Arc<dyn TokenMinter>, clock: Arc<dyn Clock>, policy: SessionPolicy) -> Self {
        Self { store, minter, clock, policy }
    }

    pub async fn execute(&self, input: ForgotPasswordInput) -> Result<ForgotPasswordOutcome, CoreError> {
        let email = input.email.trim().to_lowercase();

        let Some(user) = self.store.find_user_by_email(&email).await? else {
            return Ok(ForgotPasswordOutcome { issued: None });
        };

        let now = self.clock.now();
        let plaintext = self.minter.random_hex(32);
        let expires_at = now + self.policy.password_reset_ttl();

        self.store
            .insert_password_reset_token(PasswordResetToken {
                token_hash: self.minter.sha256_hex(&plaintext),
                user_id: user.id.clone(),
                expires_at,
                used_at: None,
            })
            .await?;

        Ok(ForgotPasswordOutcome { issued: Some((user, IssuedPasswordResetToken { plaintext, expires_at })) })
    }
}
