use serde::Serialize;

/// `GET /api/memberships` success body (spec §4.8, §6).
#[derive(Debug, Clone, Serialize)]
pub struct MembershipDto {
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembershipsResponse {
    pub memberships: Vec<MembershipDto>,
}
