use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::{MembershipStatus, Role};
use crate::core::usecases::ports::AuthStore;

pub struct MembershipView {
    pub tenant_id: String,
    pub role: Role,
    pub status: MembershipStatus,
}

/// `GET /api/memberships` (spec §4.8). Bearer-token verification happens at
/// the HTTP boundary (middleware); this use case only needs the verified
/// subject id.
pub struct ListMemberships {
    store: Arc<dyn AuthStore>,
}

impl ListMemberships {
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, user_id: &str) -> Result<Vec<MembershipView>, CoreError> {
        let memberships = self.store.list_memberships(user_id).await?;
        Ok(memberships
            .into_iter()
            .map(|m| MembershipView { tenant_id: m.tenant_id, role: m.role, status: m.status })
            .collect())
    }
}
