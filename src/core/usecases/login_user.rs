use std::sync::Arc;

use crate::core::credentials::RawCredential;
use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::Audience;
use crate::core::usecases::ports::{AuthStore, PasswordHasher};
use crate::core::usecases::session_issuer::{IssueSessionRequest, IssuedSession, SessionIssuer};

/// Redirect validation happens upstream, exactly as for [`super::register_user::RegisterUser`].
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: Audience,
    pub pkce_challenge: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: String,
    pub session: IssuedSession,
}

pub struct LoginUser {
    store: Arc<dyn AuthStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: SessionIssuer,
}

impl LoginUser {
    pub fn new(store: Arc<dyn AuthStore>, hasher: Arc<dyn PasswordHasher>, issuer: SessionIssuer) -> Self {
        Self { store, hasher, issuer }
    }

    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let email = input.email.trim().to_lowercase();
        let raw_password = RawCredential::new(input.password);

        let user = self.store.find_user_by_email(&email).await?;

        let user = match user {
            Some(user) => user,
            None => {
                // Account-enumeration defense: waste equivalent cycles before
                // returning the same generic error a wrong password would (spec §4.6).
                self.hasher.waste_cycles(&raw_password);
                return Err(AuthenticationError::UserNotFound.into());
            }
        };

        let stored_hash = match &user.password_hash {
            Some(hash) => hash,
            None => {
                self.hasher.waste_cycles(&raw_password);
                return Err(AuthenticationError::NoPasswordCredential.into());
            }
        };

        if !self.hasher.verify(&raw_password, stored_hash) {
            return Err(AuthenticationError::WrongPassword.into());
        }

        self.store.ensure_membership(&user.id, &input.tenant_id).await?;

        let session = self
            .issuer
            .issue(IssueSessionRequest {
                user_id: user.id.clone(),
                tenant_id: input.tenant_id,
                redirect_origin: input.redirect_origin,
                audience: input.audience,
                pkce_challenge: input.pkce_challenge,
                ip_address: input.ip_address,
                user_agent: input.user_agent,
            })
            .await?;

        Ok(LoginOutput { user_id: user.id, session })
    }
}
