use super::federation_state::ProviderName;

/// The common shape every provider adapter reduces its ID token or profile
/// endpoint response into, before user resolution runs (spec §4.7 step 4).
#[derive(Debug, Clone)]
pub struct NormalizedProfile {
    pub provider: ProviderName,
    pub provider_account_id: String,
    pub email: String,
    pub email_verified: bool,
    pub name: String,
    pub avatar_url: Option<String>,
}
