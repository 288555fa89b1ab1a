//! TTL policy for every short- and long-lived record this crate mints.
//!
//! Injected as a configuration object (spec §6's Required Configuration
//! table), never hardcoded into a use case.

#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_days: i64,
    pub auth_code_ttl_seconds: i64,
    pub federation_state_ttl_seconds: i64,
    pub password_reset_ttl_seconds: i64,
}

impl SessionPolicy {
    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_token_ttl_days)
    }

    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.refresh_token_ttl_days * 86_400
    }

    pub fn auth_code_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.auth_code_ttl_seconds)
    }

    pub fn federation_state_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.federation_state_ttl_seconds)
    }

    pub fn password_reset_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.password_reset_ttl_seconds)
    }
}

impl Default for SessionPolicy {
    /// Defaults from spec §6: 900s access, 30d refresh, 60s auth code, 5min
    /// federation state, 1h password reset.
    fn default() -> Self {
        Self {
            access_token_ttl_seconds: 900,
            refresh_token_ttl_days: 30,
            auth_code_ttl_seconds: 60,
            federation_state_ttl_seconds: 300,
            password_reset_ttl_seconds: 3600,
        }
    }
}
