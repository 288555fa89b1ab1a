//! Domain vocabulary for redirect-URL validation. The validation algorithm
//! itself lives in `adapters::redirect::validator`, since it depends on a
//! tenant-domain lookup port; this module holds only the pure outcome type
//! and the controlled-suffix list it's defined against.

pub mod controlled_suffix;
pub mod validated_redirect;

pub use controlled_suffix::{matches_controlled_suffix, CONTROLLED_SUFFIXES, UNKNOWN_TENANT};
pub use validated_redirect::ValidatedRedirect;
