//! Apple's OAuth client "secret" is not a static value — it is a short-lived
//! ES256-signed JWT the service mints on the fly from Apple's provisioned
//! private key (spec §4.7 step 3). This is a standalone function rather than
//! a `TokenSigner` port implementation: it signs with Apple's key, not this
//! service's own, and is only ever called by the Apple OAuth adapter.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::adapters::crypto::error::JwtError;

const APPLE_AUDIENCE: &str = "https://appleid.apple.com";
const CLIENT_SECRET_TTL_SECONDS: i64 = 5 * 60;

#[derive(Serialize)]
struct AppleClientSecretClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

pub fn mint_apple_client_secret(
    team_id: &str,
    client_id: &str,
    key_id: &str,
    private_key_pem: &str,
    now_unix: i64,
) -> Result<String, JwtError> {
    let encoding_key =
        EncodingKey::from_ec_pem(private_key_pem.as_bytes()).map_err(|e| JwtError::invalid_key(e.to_string()))?;

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(key_id.to_string());

    let claims = AppleClientSecretClaims {
        iss: team_id,
        sub: client_id,
        aud: APPLE_AUDIENCE,
        iat: now_unix,
        exp: now_unix + CLIENT_SECRET_TTL_SECONDS,
    };

    jsonwebtoken::encode(&header, &claims, &encoding_key).map_err(|e| JwtError::from(e))
}
