use serde::Serialize;

/// `GET /health` body (spec §6).
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub env: &'static str,
    #[serde(rename = "deployedAt")]
    pub deployed_at: String,
    pub subsystems: Subsystems,
    #[serde(rename = "durationMs")]
    pub duration_ms: u128,
    #[serde(rename = "correlationId")]
    pub correlation_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Subsystems {
    pub database: &'static str,
}
