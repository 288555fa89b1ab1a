//! PBKDF2-HMAC-SHA256 password hasher (spec §4.1).
//!
//! Stored form is a self-describing string `pbkdf2:<iterations>:<salt-hex>:<hash-hex>`
//! so future adapters can raise the iteration count without invalidating
//! existing rows.

use pbkdf2::pbkdf2_hmac;
use rand::RngExt;
use sha2::Sha256;

use crate::core::credentials::{RawCredential, StoredCredential};
use crate::core::usecases::ports::PasswordHasher;

const DEFAULT_ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 32;
const HASH_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct Pbkdf2PasswordHasher {
    iterations: u32,
}

impl Pbkdf2PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self { iterations: iterations.max(DEFAULT_ITERATIONS) }
    }
}

impl Default for Pbkdf2PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher for Pbkdf2PasswordHasher {
    fn hash(&self, raw: &RawCredential) -> StoredCredential {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);

        let mut derived = [0u8; HASH_LEN];
        pbkdf2_hmac::<Sha256>(raw.as_str().as_bytes(), &salt, self.iterations, &mut derived);

        let record = format!("pbkdf2:{}:{}:{}", self.iterations, hex::encode(salt), hex::encode(derived));
        StoredCredential::from_hash(record)
    }

    fn verify(&self, raw: &RawCredential, stored: &StoredCredential) -> bool {
        let Some((iterations, salt, expected)) = parse_record(stored.as_str()) else {
            return false;
        };

        let mut derived = vec![0u8; expected.len()];
        pbkdf2_hmac::<Sha256>(raw.as_str().as_bytes(), &salt, iterations, &mut derived);

        constant_time_eq(&derived, &expected)
    }

    fn waste_cycles(&self, raw: &RawCredential) {
        let salt = [0u8; SALT_LEN];
        let mut derived = [0u8; HASH_LEN];
        pbkdf2_hmac::<Sha256>(raw.as_str().as_bytes(), &salt, self.iterations, &mut derived);
    }
}

fn parse_record(record: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = record.split(':');
    if parts.next()? != "pbkdf2" {
        return None;
    }
    let iterations: u32 = parts.next()?.parse().ok()?;
    let salt = hex::decode(parts.next()?).ok()?;
    let hash = hex::decode(parts.next()?).ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((iterations, salt, hash))
}

/// Length-prefix check then a fold-XOR loop over the shorter length, so
/// timing leaks neither the hash content nor (beyond a coarse length check)
/// its size (spec §4.1).
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::RawCredential;

    #[test]
    fn verify_round_trips_correct_password() {
        let hasher = Pbkdf2PasswordHasher::new(1_000);
        let raw = RawCredential::new("correct horse battery staple");
        let stored = hasher.hash(&raw);
        assert!(hasher.verify(&raw, &stored));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hasher = Pbkdf2PasswordHasher::new(1_000);
        let stored = hasher.hash(&RawCredential::new("right-password"));
        assert!(!hasher.verify(&RawCredential::new("wrong-password"), &stored));
    }

    #[test]
    fn verify_rejects_malformed_record_without_panicking() {
        let hasher = Pbkdf2PasswordHasher::new(1_000);
        let malformed = StoredCredential::from_hash("not-a-valid-record");
        assert!(!hasher.verify(&RawCredential::new("anything"), &malformed));
    }
}
