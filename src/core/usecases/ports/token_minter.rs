/// Contract for the mechanical half of crypto primitives (spec §4.1):
/// random opaque token material and the digests/transforms applied to it.
/// Kept separate from [`super::token_signer::TokenSigner`], which is
/// specifically the ES256 JWT kernel — refresh tokens, authorization codes,
/// OAuth state, and reset tokens are all plain random bearer values, never
/// JWTs.
pub trait TokenMinter: Send + Sync {
    /// `n_bytes` of CSPRNG output, lowercase hex encoded.
    fn random_hex(&self, n_bytes: usize) -> String;

    /// `n_bytes` of CSPRNG output, base64url (no padding) encoded — used for
    /// PKCE verifiers per RFC 7636.
    fn random_base64url(&self, n_bytes: usize) -> String;

    /// `SHA-256(input)`, hex encoded — the storage representation for every
    /// bearer token this crate issues.
    fn sha256_hex(&self, input: &str) -> String;

    /// PKCE S256 transform: `base64url(SHA-256(code_verifier))`.
    fn pkce_challenge(&self, code_verifier: &str) -> String;
}
