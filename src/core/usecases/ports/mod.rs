//! Port definitions for the use-case layer.
//!
//! These traits define the contracts for every external dependency the use
//! cases need. No infrastructure or implementation detail lives here —
//! adapters implement these traits to provide concrete behavior.

pub mod audit_sink;
pub mod auth_store;
pub mod clock;
pub mod domain_lookup;
pub mod email_sender;
pub mod password_hasher;
pub mod rate_limiter;
pub mod token_minter;
pub mod token_signer;

pub use audit_sink::{AuditEvent, AuditSink};
pub use auth_store::{AuthStore, NewUser};
pub use clock::{Clock, SystemClock};
pub use domain_lookup::DomainLookup;
pub use email_sender::{EmailNotification, EmailSender};
pub use password_hasher::PasswordHasher;
pub use rate_limiter::RateLimiter;
pub use token_minter::TokenMinter;
pub use token_signer::TokenSigner;
