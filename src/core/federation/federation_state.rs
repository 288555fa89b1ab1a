use chrono::{DateTime, Utc};

/// Transient record pinning a single OAuth/OIDC round-trip (spec §3, §4.7).
///
/// Single-use: consumed atomically on callback regardless of whether the
/// callback ultimately succeeds, to prevent replay of a stale state value.
#[derive(Debug, Clone)]
pub struct FederationState {
    pub state: String,
    pub tenant_id: String,
    pub redirect_url: String,
    pub code_verifier: String,
    pub nonce: Option<String>,
    pub provider: ProviderName,
    pub expires_at: DateTime<Utc>,
}

impl FederationState {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The four supported identity providers.
///
/// Kept separate from the adapter-level `Provider` config enum
/// (`adapters::oauth::provider::Provider`) so the domain layer can name a
/// provider without knowing its client id, secret, or endpoint shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    Google,
    Facebook,
    Apple,
    Microsoft,
}

impl ProviderName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Google => "google",
            ProviderName::Facebook => "facebook",
            ProviderName::Apple => "apple",
            ProviderName::Microsoft => "microsoft",
        }
    }

    /// True for providers that deliver an OIDC ID token (all but Facebook,
    /// which only exposes a Graph API profile endpoint).
    pub fn supports_oidc(&self) -> bool {
        !matches!(self, ProviderName::Facebook)
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(ProviderName::Google),
            "facebook" => Ok(ProviderName::Facebook),
            "apple" => Ok(ProviderName::Apple),
            "microsoft" => Ok(ProviderName::Microsoft),
            other => Err(format!("unknown provider: {other}")),
        }
    }
}
