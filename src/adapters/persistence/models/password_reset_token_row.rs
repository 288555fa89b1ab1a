use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::token::PasswordResetToken;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PasswordResetTokenRow {
    pub token_hash: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl From<PasswordResetTokenRow> for PasswordResetToken {
    fn from(row: PasswordResetTokenRow) -> Self {
        PasswordResetToken {
            token_hash: row.token_hash,
            user_id: row.user_id.to_string(),
            expires_at: row.expires_at,
            used_at: row.used_at,
        }
    }
}
