/// Errors for "could the identity be proven?" — always generic to the caller.
///
/// Every variant maps to the same user-visible `invalid_credentials` code;
/// the distinction exists only for internal audit logging, never for the
/// HTTP response body (account-enumeration defense, spec §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    UserNotFound,
    NoPasswordCredential,
    WrongPassword,
    AccountSuspended,
    InvalidAccessToken,
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound => write!(f, "no user for the given identifier"),
            Self::NoPasswordCredential => write!(f, "account has no password credential"),
            Self::WrongPassword => write!(f, "password does not match"),
            Self::AccountSuspended => write!(f, "account is suspended"),
            Self::InvalidAccessToken => write!(f, "bearer access token is missing, malformed, or expired"),
        }
    }
}
