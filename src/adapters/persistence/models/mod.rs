//! Row types mirroring the seven tables. Kept distinct from the domain
//! entities in `core::` — a row knows column types (`Uuid`, raw strings for
//! enum columns); the domain type knows only its own vocabulary.

pub mod authorization_code_row;
pub mod federated_identity_row;
pub mod federation_state_row;
pub mod password_reset_token_row;
pub mod refresh_token_row;
pub mod tenant_membership_row;
pub mod user_row;

pub use authorization_code_row::AuthorizationCodeRow;
pub use federated_identity_row::FederatedIdentityRow;
pub use federation_state_row::FederationStateRow;
pub use password_reset_token_row::PasswordResetTokenRow;
pub use refresh_token_row::RefreshTokenRow;
pub use tenant_membership_row::TenantMembershipRow;
pub use user_row::UserRow;
