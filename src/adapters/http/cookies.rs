//! The `cp_refresh` session cookie (spec §6 Cookies).

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::config::{AppConfig, Environment};

pub const REFRESH_COOKIE_NAME: &str = "cp_refresh";

fn is_secure(config: &AppConfig) -> bool {
    !matches!(config.environment, Environment::Development)
}

/// Builds the `Set-Cookie` value for a freshly issued or rotated refresh
/// token: HttpOnly, Secure except in development, SameSite=Lax, scoped to
/// the auth host, expiring with the refresh token's own TTL.
pub fn refresh_cookie(config: &AppConfig, plaintext: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, plaintext))
        .http_only(true)
        .secure(is_secure(config))
        .same_site(SameSite::Lax)
        .path("/")
        .domain(config.auth_domain.clone())
        .max_age(time::Duration::seconds(max_age_seconds.max(0)))
        .build()
}

/// Clears the cookie by re-emitting it with `Max-Age=0`.
pub fn clear_refresh_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, String::new()))
        .http_only(true)
        .secure(is_secure(config))
        .same_site(SameSite::Lax)
        .path("/")
        .domain(config.auth_domain.clone())
        .max_age(time::Duration::ZERO)
        .build()
}
