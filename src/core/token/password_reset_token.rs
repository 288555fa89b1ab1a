use chrono::{DateTime, Utc};

/// A single-use password-reset token (spec §3). Single-use by setting
/// `used_at` rather than deleting — the row remains as an audit trace.
#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

impl PasswordResetToken {
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.used_at.is_none() && now < self.expires_at
    }
}

pub struct IssuedPasswordResetToken {
    pub plaintext: String,
    pub expires_at: DateTime<Utc>,
}
