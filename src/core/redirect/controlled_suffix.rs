/// Domain tails the service always accepts in redirect and CORS origin
/// checks without a per-tenant lookup (spec §4.3 rule 6, glossary).
pub const CONTROLLED_SUFFIXES: &[&str] = &[
    ".centerpiece.shop",
    ".centerpiece.app",
    ".centerpiece.io",
    ".centerpiecelab.com",
    ".workers.dev",
    ".pages.dev",
];

pub fn matches_controlled_suffix(host: &str) -> bool {
    CONTROLLED_SUFFIXES.iter().any(|suffix| host.ends_with(suffix))
}

/// Sentinel tenant id used when a controlled-suffix host has no domain
/// record of its own (spec §4.3 rule 6).
pub const UNKNOWN_TENANT: &str = "__unknown__";
