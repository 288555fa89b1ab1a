use crate::core::error::CoreError;
use crate::core::token::AccessTokenClaims;

/// Contract for the ES256 JWT kernel (spec §4.5): signing, verification, and
/// discovery-document publication.
pub trait TokenSigner: Send + Sync {
    /// Signs `claims` and returns the compact three-segment JWS.
    fn sign(&self, claims: &AccessTokenClaims) -> Result<String, CoreError>;

    /// Verifies a compact JWS: structure, `alg`/`typ`, expiry, and signature.
    /// Used internally only (e.g. the memberships endpoint); downstream
    /// tenants verify independently against the published JWKS.
    fn verify(&self, compact: &str) -> Result<AccessTokenClaims, CoreError>;

    /// Serialized JWKS discovery document body and its ETag, computed once
    /// and cached for the process lifetime (spec §9 — one of the two
    /// legitimate process-wide caches).
    fn jwks_document(&self) -> (String, String);

    /// The `kid` this signer currently stamps into JWT headers.
    fn current_kid(&self) -> &str;
}
