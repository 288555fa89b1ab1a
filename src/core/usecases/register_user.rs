use std::sync::Arc;

use crate::core::credentials::{CredentialPolicy, RawCredential};
use crate::core::error::{CoreError, StateError, ValidationError};
use crate::core::identity::Audience;
use crate::core::usecases::ports::{AuthStore, NewUser, PasswordHasher};
use crate::core::usecases::session_issuer::{IssueSessionRequest, IssuedSession, SessionIssuer};

/// Order of checks follows spec §4.6 "Registration" verbatim: redirect
/// validation happens upstream (the handler calls the redirect validator
/// before constructing this input), then email shape, password length,
/// confirmation match, name default, uniqueness, then creation.
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: Option<String>,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: Audience,
    pub pkce_challenge: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

pub struct RegisterOutput {
    pub user_id: String,
    pub session: IssuedSession,
}

pub struct RegisterUser {
    store: Arc<dyn AuthStore>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: SessionIssuer,
    credential_policy: CredentialPolicy,
}

impl RegisterUser {
    pub fn new(
        store: Arc<dyn AuthStore>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: SessionIssuer,
        credential_policy: CredentialPolicy,
    ) -> Self {
        Self { store, hasher, issuer, credential_policy }
    }

    pub async fn execute(&self, input: RegisterInput) -> Result<RegisterOutput, CoreError> {
        let email = input.email.trim().to_lowercase();
        if !is_well_formed_email(&email) {
            return Err(ValidationError::invalid_email(email).into());
        }

        let raw_password = RawCredential::new(input.password);
        raw_password.validate(&self.credential_policy)?;

        if raw_password.as_str() != input.confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let display_name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| local_part(&email));

        if self.store.find_user_by_email(&email).await?.is_some() {
            return Err(StateError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hasher.hash(&raw_password);

        let user = self
            .store
            .create_user(NewUser {
                email,
                email_verified: false,
                password_hash: Some(password_hash),
                display_name,
                avatar_url: None,
            })
            .await?;

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

        Ok(RegisterOutput { user_id: user.id, session })
    }
}

/// `local@domain.tld` shape check (spec §4.6: "a simple ... check is sufficient").
fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn local_part(email: &str) -> String {
    email.split_once('@').map(|(local, _)| local.to_string()).unwrap_or_else(|| email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_email_requires_dot_in_domain() {
        assert!(is_well_formed_email("a@b.test"));
        assert!(!is_well_formed_email("a@b"));
        assert!(!is_well_formed_email("ab.test"));
    }

    #[test]
    fn local_part_extracts_prefix() {
        assert_eq!(local_part("alice@example.test"), "alice");
    }
}
