use crate::core::error::ValidationError;

use super::credential_policy::CredentialPolicy;

/// Transient plaintext password presented during registration or login.
///
/// Deliberately does not implement `Clone` to avoid accidental duplication
/// of secret material. Callers consume it (move) and hand the inner secret
/// to a `PasswordHasher` port.
pub struct RawCredential {
    secret: String,
}

impl RawCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.secret
    }

    pub fn into_inner(self) -> String {
        self.secret
    }

    /// Validate length against policy. Pure and deterministic — no hashing.
    pub fn validate(&self, policy: &CredentialPolicy) -> Result<(), ValidationError> {
        if self.secret.len() < policy.min_length {
            return Err(ValidationError::password_too_short(policy.min_length));
        }
        Ok(())
    }
}
