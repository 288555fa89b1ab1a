use chrono::{DateTime, Utc};

/// Absolute expiry check shared by every single-use and rotatable record
/// (auth codes, refresh tokens, federation state, reset tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetime {
    pub expires_at: DateTime<Utc>,
}

impl TokenLifetime {
    pub fn new(expires_at: DateTime<Utc>) -> Self {
        Self { expires_at }
    }

    pub fn from_ttl(now: DateTime<Utc>, ttl: chrono::Duration) -> Self {
        Self { expires_at: now + ttl }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_at_boundary_counts_as_expired() {
        let now = Utc::now();
        let lifetime = TokenLifetime::new(now);
        assert!(lifetime.is_expired(now));
    }

    #[test]
    fn future_expiry_is_not_expired() {
        let now = Utc::now();
        let lifetime = TokenLifetime::from_ttl(now, chrono::Duration::seconds(60));
        assert!(!lifetime.is_expired(now));
    }
}
