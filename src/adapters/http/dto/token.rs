use serde::{Deserialize, Serialize};

/// `POST /api/token` body (spec §4.8, §6).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub code: String,
    pub tenant_id: String,
    pub redirect_origin: String,
    pub code_verifier: Option<String>,
}

/// `POST /api/token` success body. `Cache-Control: no-store` is set by the
/// handler, not serialized here.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}
