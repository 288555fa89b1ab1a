use serde::Deserialize;

/// `POST /api/reset-password` body (spec §6).
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub tenant: Option<String>,
}
