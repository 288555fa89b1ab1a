/// Errors for missing, expired, or already-consumed single-use records.
///
/// Covers authorization codes, refresh tokens, federation state, and
/// password-reset tokens — the common shape is "this record either never
/// existed, already got used, or outlived its TTL".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    AuthCodeInvalid,
    SessionExpired,
    FederationStateInvalid,
    ResetTokenInvalid,
    EmailAlreadyRegistered,
}

impl StateError {
    /// Closed set of `?error=` codes from the external interface (spec §7).
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthCodeInvalid => "invalid_token",
            Self::SessionExpired => "session_expired",
            Self::FederationStateInvalid => "oauth_failed",
            Self::ResetTokenInvalid => "invalid_token",
            Self::EmailAlreadyRegistered => "email_exists",
        }
    }
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthCodeInvalid => write!(f, "invalid or expired authorization code"),
            Self::SessionExpired => write!(f, "session has expired"),
            Self::FederationStateInvalid => write!(f, "oauth flow state is invalid or expired"),
            Self::ResetTokenInvalid => write!(f, "invalid or expired reset token"),
            Self::EmailAlreadyRegistered => write!(f, "email is already registered"),
        }
    }
}
