/// Errors specific to ES256 signing and verification.
///
/// These never leak past the adapter boundary as-is; `TokenSigner` maps
/// them into `CoreError` (signing failures become `UnexpectedError` — a
/// healthy process should never fail to sign with its own key — while
/// verification failures become `AuthenticationError::InvalidAccessToken`).
#[derive(Debug, Clone)]
pub enum JwtError {
    Encoding { reason: String },
    Decoding { reason: String },
    InvalidKey { reason: String },
}

impl JwtError {
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding { reason: reason.into() }
    }

    pub fn decoding(reason: impl Into<String>) -> Self {
        Self::Decoding { reason: reason.into() }
    }

    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey { reason: reason.into() }
    }
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encoding { reason } => write!(f, "jwt encoding failed: {reason}"),
            Self::Decoding { reason } => write!(f, "jwt decoding failed: {reason}"),
            Self::InvalidKey { reason } => write!(f, "invalid jwt key material: {reason}"),
        }
    }
}

impl std::error::Error for JwtError {}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::InvalidKeyFormat | ErrorKind::InvalidEcdsaKey => JwtError::invalid_key(err.to_string()),
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::ExpiredSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_) => JwtError::decoding(err.to_string()),
            _ => JwtError::encoding(err.to_string()),
        }
    }
}
