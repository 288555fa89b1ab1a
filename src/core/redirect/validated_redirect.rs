/// The outcome of a successful redirect validation (spec §4.3): an origin
/// string and the tenant id authoritative for that origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRedirect {
    pub origin: String,
    pub tenant_id: String,
}
