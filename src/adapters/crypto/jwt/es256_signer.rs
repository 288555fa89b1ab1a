//! ES256 JWT kernel (spec §4.5): signs and verifies access tokens, and
//! publishes the verification key as a cacheable JWKS document.

use std::sync::OnceLock;

use base64::Engine;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::pkcs8::DecodePublicKey;
use sha2::{Digest, Sha256};

use crate::adapters::crypto::error::JwtError;
use crate::core::error::{AuthenticationError, CoreError, UnexpectedError};
use crate::core::token::AccessTokenClaims;
use crate::core::usecases::ports::TokenSigner;

pub struct Es256TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    kid: String,
    jwks: OnceLock<(String, String)>,
    public_key_pem: String,
}

impl Es256TokenSigner {
    pub fn new(private_key_pem: &str, public_key_pem: &str, kid: impl Into<String>) -> Result<Self, JwtError> {
        let encoding_key =
            EncodingKey::from_ec_pem(private_key_pem.as_bytes()).map_err(|e| JwtError::invalid_key(e.to_string()))?;
        let decoding_key =
            DecodingKey::from_ec_pem(public_key_pem.as_bytes()).map_err(|e| JwtError::invalid_key(e.to_string()))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            kid: kid.into(),
            jwks: OnceLock::new(),
            public_key_pem: public_key_pem.to_string(),
        })
    }

    fn build_jwks(&self) -> Result<(String, String), JwtError> {
        let public_key =
            p256::PublicKey::from_public_key_pem(&self.public_key_pem).map_err(|e| JwtError::invalid_key(e.to_string()))?;
        let point = public_key.to_encoded_point(false);
        let x = point.x().ok_or_else(|| JwtError::invalid_key("public key missing x coordinate"))?;
        let y = point.y().ok_or_else(|| JwtError::invalid_key("public key missing y coordinate"))?;

        let encoder = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let body = serde_json::json!({
            "keys": [{
                "kty": "EC",
                "crv": "P-256",
                "alg": "ES256",
                "use": "sig",
                "kid": self.kid,
                "x": encoder.encode(x),
                "y": encoder.encode(y),
            }]
        })
        .to_string();

        let etag = format!("\"{}\"", hex::encode(Sha256::digest(body.as_bytes())));
        Ok((body, etag))
    }
}

impl TokenSigner for Es256TokenSigner {
    fn sign(&self, claims: &AccessTokenClaims) -> Result<String, CoreError> {
        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.kid.clone());

        jsonwebtoken::encode(&header, claims, &self.encoding_key)
            .map_err(|e| CoreError::Unexpected(UnexpectedError::new(JwtError::from(e).to_string())))
    }

    fn verify(&self, compact: &str) -> Result<AccessTokenClaims, CoreError> {
        let mut validation = Validation::new(Algorithm::ES256);
        validation.validate_aud = false;

        jsonwebtoken::decode::<AccessTokenClaims>(compact, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| CoreError::Authentication(AuthenticationError::InvalidAccessToken))
    }

    fn jwks_document(&self) -> (String, String) {
        self.jwks
            .get_or_init(|| self.build_jwks().unwrap_or_else(|e| (format!("{{\"error\":\"{e}\"}}"), "\"error\"".to_string())))
            .clone()
    }

    fn current_kid(&self) -> &str {
        &self.kid
    }
}
