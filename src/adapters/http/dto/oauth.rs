use serde::Deserialize;

/// `GET /oauth/<provider>` query string (spec §4.7 step 1-2).
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthInitiateQuery {
    pub redirect: String,
    pub tenant: Option<String>,
}

/// `GET`/`POST` `/oauth/<provider>/callback` params (spec §4.7 step 1). Apple
/// alone posts these form-encoded and adds a one-time `user` JSON blob.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub user: Option<String>,
}

/// The subset of Apple's one-time `user` blob this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct AppleUserBlob {
    pub name: Option<AppleUserName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppleUserName {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}
