use serde::Deserialize;

/// `POST /api/forgot-password` body (spec §6). `tenant`/`redirect` are
/// accepted but unused by the use case — they only shape where the handler
/// redirects afterward.
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
    pub tenant: Option<String>,
    pub redirect: Option<String>,
}
