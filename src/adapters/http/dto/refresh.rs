use serde::Deserialize;

/// `GET /api/refresh` query string (spec §6).
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshQuery {
    pub redirect: String,
    pub tenant: Option<String>,
    pub audience: Option<String>,
}
