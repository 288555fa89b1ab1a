/// Errors specific to the federation round trip with a third-party provider.
///
/// Every variant collapses to `oauth_failed` at the HTTP boundary except
/// `NotConfigured`, which the handler checks before initiation even starts
/// (spec §4.7 step 1) and maps to its own `oauth_not_configured` code.
#[derive(Debug, Clone)]
pub enum OAuthProviderError {
    NotConfigured,
    ExchangeFailed { reason: String },
    InvalidIdToken { reason: String },
    ProfileFetchFailed { reason: String },
}

impl std::fmt::Display for OAuthProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "provider has no credentials configured"),
            Self::ExchangeFailed { reason } => write!(f, "authorization code exchange failed: {reason}"),
            Self::InvalidIdToken { reason } => write!(f, "id token failed validation: {reason}"),
            Self::ProfileFetchFailed { reason } => write!(f, "profile endpoint fetch failed: {reason}"),
        }
    }
}

impl std::error::Error for OAuthProviderError {}
