use chrono::{DateTime, Utc};

use crate::core::credentials::StoredCredential;

/// Platform-wide user identity.
///
/// The email-verified flag is monotonic: callers may flip it false→true but
/// must never flip it back (spec §3). `password_hash` is `None` iff the user
/// has only federated credentials.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub email_verified: bool,
    pub password_hash: Option<StoredCredential>,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}
