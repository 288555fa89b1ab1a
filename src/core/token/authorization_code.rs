use chrono::{DateTime, Utc};

use crate::core::identity::Audience;

/// A single-use authorization code issued at the end of redirect-based
/// sign-in, consumed by the token-exchange endpoint (spec §3, §4.4).
///
/// `code_hash` is the primary key — the plaintext never touches storage.
#[derive(Debug, Clone)]
pub struct AuthorizationCode {
    pub code_hash: String,
    pub user_id: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub audience: Audience,
    pub pkce_challenge: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AuthorizationCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// PKCE S256 verification: `base64url(SHA256(code_verifier)) == pkce_challenge`.
    /// Returns `true` unconditionally when no challenge was stored (spec §4.4 step 5).
    pub fn challenge_matches(&self, derived_challenge: &str) -> bool {
        match &self.pkce_challenge {
            Some(stored) => stored == derived_challenge,
            None => true,
        }
    }
}

#[derive(Debug)]
pub struct IssuedAuthorizationCode {
    pub plaintext: String,
    pub expires_at: DateTime<Utc>,
}
