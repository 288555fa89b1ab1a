use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::identity::Audience;
use crate::core::token::AuthorizationCode;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthorizationCodeRow {
    pub code_hash: String,
    pub user_id: Uuid,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: String,
    pub pkce_challenge: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<AuthorizationCodeRow> for AuthorizationCode {
    fn from(row: AuthorizationCodeRow) -> Self {
        AuthorizationCode {
            code_hash: row.code_hash,
            user_id: row.user_id.to_string(),
            tenant_id: row.tenant_id,
            redirect_origin: row.redirect_origin,
            audience: Audience::from_str(&row.audience).unwrap_or_default(),
            pkce_challenge: row.pkce_challenge,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}
