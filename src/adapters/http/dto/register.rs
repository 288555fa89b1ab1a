use serde::Deserialize;

/// `POST /api/register` body (spec §6). Submitted as an HTML form by the
/// external login-page renderer, so this also accepts `application/json`
/// via axum's content-negotiating form extractor at the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub name: Option<String>,
    pub redirect: String,
    pub tenant: Option<String>,
    pub audience: Option<String>,
    pub code_challenge: Option<String>,
}
