/// Errors for an external collaborator being unreachable or failing.
///
/// Data-store dependency failures fail closed (500); rate-limit and email
/// dependency failures fail open and never reach this type — callers of
/// those two ports swallow failures at the adapter boundary (spec §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    DataStoreUnavailable { reason: String },
    ProviderUnreachable { provider: String, reason: String },
}

impl std::fmt::Display for DependencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataStoreUnavailable { reason } => write!(f, "data store unavailable: {reason}"),
            Self::ProviderUnreachable { provider, reason } => {
                write!(f, "provider {provider} unreachable: {reason}")
            }
        }
    }
}
