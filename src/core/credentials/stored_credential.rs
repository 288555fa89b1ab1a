/// Opaque representation of a persisted password hash.
///
/// Core does not know the hashing algorithm or string layout; it treats
/// this as an opaque token produced and consumed only by the
/// `PasswordHasher` port and the persistence layer.
#[derive(Clone)]
pub struct StoredCredential {
    repr: String,
}

impl StoredCredential {
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { repr: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.repr
    }

    pub fn into_string(self) -> String {
        self.repr
    }
}

impl std::fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoredCredential([REDACTED])")
    }
}
