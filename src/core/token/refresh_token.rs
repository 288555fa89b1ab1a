use chrono::{DateTime, Utc};

/// A refresh token record as the token kernel sees it.
///
/// The plaintext value never appears here — only its SHA-256 hash, as spec
/// §4.1 requires ("the plaintext must not survive beyond the response that
/// returns it").
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: String,
    pub token_hash: String,
    pub family_id: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl RefreshToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// The plaintext value handed back to the client exactly once.
#[derive(Debug)]
pub struct IssuedRefreshToken {
    pub plaintext: String,
    pub family_id: String,
    pub expires_at: DateTime<Utc>,
}
