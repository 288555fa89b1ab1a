use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::identity::FederatedIdentity;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FederatedIdentityRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: String,
    pub provider_account_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<FederatedIdentityRow> for FederatedIdentity {
    fn from(row: FederatedIdentityRow) -> Self {
        FederatedIdentity {
            id: row.id.to_string(),
            user_id: row.user_id.to_string(),
            provider: row.provider,
            provider_account_id: row.provider_account_id,
            created_at: row.created_at,
        }
    }
}
