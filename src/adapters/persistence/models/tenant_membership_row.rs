use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::identity::role::{MembershipStatus, Role};
use crate::core::identity::TenantMembership;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TenantMembershipRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tenant_id: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TenantMembershipRow {
    /// Falls back to `Customer`/`Active` on an unparseable row rather than
    /// erroring — the columns are constrained at the schema level, so this
    /// only guards against a future enum variant the binary doesn't know yet.
    pub fn into_domain(self) -> TenantMembership {
        TenantMembership {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            tenant_id: self.tenant_id,
            role: Role::from_str(&self.role).unwrap_or(Role::Customer),
            status: MembershipStatus::from_str(&self.status).unwrap_or(MembershipStatus::Active),
            created_at: self.created_at,
        }
    }
}
