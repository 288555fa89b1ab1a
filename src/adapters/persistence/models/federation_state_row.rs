use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::core::federation::{FederationState, ProviderName};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FederationStateRow {
    pub state: String,
    pub tenant_id: String,
    pub redirect_url: String,
    pub code_verifier: String,
    pub nonce: Option<String>,
    pub provider: String,
    pub expires_at: DateTime<Utc>,
}

impl From<FederationStateRow> for FederationState {
    fn from(row: FederationStateRow) -> Self {
        FederationState {
            state: row.state,
            tenant_id: row.tenant_id,
            redirect_url: row.redirect_url,
            code_verifier: row.code_verifier,
            nonce: row.nonce,
            provider: ProviderName::from_str(&row.provider).unwrap_or(ProviderName::Google),
            expires_at: row.expires_at,
        }
    }
}
