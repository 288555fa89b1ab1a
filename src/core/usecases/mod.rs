//! Application use cases: one struct per operation, each holding the ports
//! it needs as `Arc<dyn Trait>` fields. Construction (wiring concrete
//! adapters in) happens once at startup; handlers just call `execute`.

pub mod exchange_code;
pub mod forgot_password;
pub mod list_memberships;
pub mod login_user;
pub mod oauth_callback;
pub mod oauth_initiate;
pub mod policies;
pub mod ports;
pub mod refresh_session;
pub mod register_user;
pub mod reset_password;
pub mod revoke_session;
pub mod session_issuer;
#[cfg(test)]
mod session_flow_tests;
#[cfg(test)]
pub mod test_support;

pub use exchange_code::{ExchangeCode, ExchangeCodeInput, ExchangeCodeOutput};
pub use forgot_password::{ForgotPassword, ForgotPasswordInput, ForgotPasswordOutcome};
pub use list_memberships::{ListMemberships, MembershipView};
pub use login_user::{LoginInput, LoginOutput, LoginUser};
pub use oauth_callback::{OAuthCallback, OAuthCallbackInput, OAuthCallbackOutput};
pub use oauth_initiate::{OAuthInitiate, OAuthInitiateInput, OAuthInitiateOutput};
pub use refresh_session::{RefreshSession, RefreshSessionInput, RefreshSessionOutput};
pub use register_user::{RegisterInput, RegisterOutput, RegisterUser};
pub use reset_password::{ResetPassword, ResetPasswordInput, ResetPasswordOutput};
pub use revoke_session::{RevokeSession, RevokeSessionInput};
pub use session_issuer::{IssueSessionRequest, IssuedSession, SessionIssuer};
