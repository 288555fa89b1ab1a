//! Shared `reqwest` client for provider token-endpoint and profile calls.
//!
//! Redirects are disabled per oauth2 security guidance (a redirecting token
//! endpoint is not a thing any of the four providers do, and following one
//! would be an SSRF foothold); the 10 second deadline matches the bounded
//! outbound-call requirement in spec §5.

use std::time::Duration;

const PROVIDER_CALL_TIMEOUT: Duration = Duration::from_secs(10);

pub fn build() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(PROVIDER_CALL_TIMEOUT)
        .build()
        .expect("reqwest client configuration is static and always valid")
}
