use chrono::{DateTime, Utc};

use super::role::{MembershipStatus, Role};

/// Association between a user and a tenant with a role (spec §3).
///
/// Uniqueness is on `(user_id, tenant_id, role)` — a user may hold multiple
/// distinct roles at the same tenant but never a duplicate of one.
#[derive(Debug, Clone)]
pub struct TenantMembership {
    pub id: String,
    pub user_id: String,
    pub tenant_id: String,
    pub role: Role,
    pub status: MembershipStatus,
    pub created_at: DateTime<Utc>,
}

impl TenantMembership {
    pub fn is_active(&self) -> bool {
        matches!(self.status, MembershipStatus::Active)
    }
}
