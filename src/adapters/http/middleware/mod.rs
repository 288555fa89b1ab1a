//! Cross-cutting HTTP concerns: correlation tagging, security headers, rate
//! limiting, and bearer authentication (spec §4.9).

pub mod bearer_auth;
pub mod correlation;
pub mod rate_limit;
pub mod security_headers;

pub use bearer_auth::bearer_auth;
pub use correlation::{correlation, CorrelationId};
pub use rate_limit::rate_limit;
pub use security_headers::security_headers;
