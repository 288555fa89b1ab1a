use serde::Deserialize;

/// `POST /api/login` body (spec §6).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub redirect: String,
    pub tenant: Option<String>,
    pub audience: Option<String>,
    pub code_challenge: Option<String>,
}
