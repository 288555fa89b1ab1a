use async_trait::async_trait;

/// Narrow port for resolving a redirect host to a tenant id (spec §4.3
/// rule 6b). Kept separate from [`super::auth_store::AuthStore`] because
/// tenant-domain registration is owned by an external collaborator this
/// crate does not persist (spec §1 Non-goals) — the redirect validator can
/// be unit tested against a hand-rolled fake without a database.
#[async_trait]
pub trait DomainLookup: Send + Sync {
    /// Returns the tenant id registered for `host`, if any.
    async fn lookup_tenant_by_domain(&self, host: &str) -> Option<String>;
}
