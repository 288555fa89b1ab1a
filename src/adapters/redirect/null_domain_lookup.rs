use async_trait::async_trait;

use crate::core::usecases::ports::DomainLookup;

/// Tenant-domain registration is owned by an external collaborator this
/// crate never persists (spec §1 Non-goals). This adapter is the production
/// default: every custom-domain host falls through to the redirect
/// validator's controlled-suffix path, which is the only case this service
/// can resolve on its own.
pub struct NullDomainLookup;

#[async_trait]
impl DomainLookup for NullDomainLookup {
    async fn lookup_tenant_by_domain(&self, _host: &str) -> Option<String> {
        None
    }
}
