use chrono::{DateTime, Utc};

/// Binds a user to a third-party provider account (spec §3).
///
/// Unique on `(provider, provider_account_id)` — one provider account maps
/// to at most one platform user.
#[derive(Debug, Clone)]
pub struct FederatedIdentity {
    pub id: String,
    pub user_id: String,
    pub provider: String,
    pub provider_account_id: String,
    pub created_at: DateTime<Utc>,
}
