//! Core credential domain types and validation primitives.
//!
//! These modules define credential vocabulary for the core authentication
//! domain. They intentionally avoid any hashing or persistence detail —
//! those belong to adapters.

pub mod credential_policy;
pub mod raw_credential;
pub mod stored_credential;

pub use credential_policy::CredentialPolicy;
pub use raw_credential::RawCredential;
pub use stored_credential::StoredCredential;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_credential_below_min_length_is_rejected() {
        let policy = CredentialPolicy::default();
        let raw = RawCredential::new("short1");
        assert!(raw.validate(&policy).is_err());
    }

    #[test]
    fn raw_credential_at_min_length_is_accepted() {
        let policy = CredentialPolicy::default();
        let raw = RawCredential::new("exactly8");
        assert!(raw.validate(&policy).is_ok());
    }
}
