/// Password validation policy (spec §4.6: length ≥ 8).
#[derive(Debug, Clone, Copy)]
pub struct CredentialPolicy {
    pub min_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}
