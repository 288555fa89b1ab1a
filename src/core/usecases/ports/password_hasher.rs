use crate::core::credentials::{RawCredential, StoredCredential};

/// Contract for password hashing and verification (spec §4.1).
///
/// `verify` must reject a malformed stored record by returning `false`,
/// never by panicking or propagating an error — a corrupt row is not the
/// caller's fault and must still look like "wrong password" to the user.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, raw: &RawCredential) -> StoredCredential;

    fn verify(&self, raw: &RawCredential, stored: &StoredCredential) -> bool;

    /// Run a dummy derivation of equivalent cost to a real `verify` call,
    /// without any real stored record to compare against. Used by the login
    /// flow to equalize response timing when no user exists for the
    /// presented email (spec §4.6 account-enumeration defense).
    fn waste_cycles(&self, raw: &RawCredential);
}
