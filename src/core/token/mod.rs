//! Token-kernel domain types: the pieces of an issued session that outlive
//! a single request (access-token claim shapes, refresh-token rotation
//! records, and single-use authorization codes).

pub mod access_token_claims;
pub mod authorization_code;
pub mod password_reset_token;
pub mod refresh_token;
pub mod token_lifetime;

pub use access_token_claims::AccessTokenClaims;
pub use authorization_code::{AuthorizationCode, IssuedAuthorizationCode};
pub use password_reset_token::{IssuedPasswordResetToken, PasswordResetToken};
pub use refresh_token::{IssuedRefreshToken, RefreshToken};
pub use token_lifetime::TokenLifetime;
