// Core error types for the authentication domain.

// Errors are organized by the six kinds spec.md §7 draws:
//  - [`ValidationError`]: user-correctable input shape
//  - [`AuthenticationError`]: credentials rejected — always generic
//  - [`AuthorizationError`]: membership or role missing
//  - [`StateError`]: missing/expired/already-consumed code or token
//  - [`DependencyError`]: data-store or provider unreachable
//  - [`UnexpectedError`]: uncaught in handler (programmer error)
//
// Design Principles:
//  - No transport concepts: errors contain no HTTP status codes
//  - No exceptions: errors are values, not panics
//  - Domain language: errors express intent, not technical implementation

pub mod authentication_error;
pub mod authorization_error;
pub mod dependency_error;
pub mod state_error;
pub mod unexpected_error;
pub mod validation_error;

pub use authentication_error::AuthenticationError;
pub use authorization_error::AuthorizationError;
pub use dependency_error::DependencyError;
pub use state_error::StateError;
pub use unexpected_error::UnexpectedError;
pub use validation_error::ValidationError;

/// Core error type that encompasses all authentication domain failures.
#[derive(Debug, Clone)]
pub enum CoreError {
    Validation(ValidationError),
    Authentication(AuthenticationError),
    Authorization(AuthorizationError),
    State(StateError),
    Dependency(DependencyError),
    Unexpected(UnexpectedError),
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, CoreError::Authentication(_))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, CoreError::State(_))
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::Validation(e) => write!(f, "validation error: {e}"),
            CoreError::Authentication(e) => write!(f, "authentication error: {e}"),
            CoreError::Authorization(e) => write!(f, "authorization error: {e}"),
            CoreError::State(e) => write!(f, "state error: {e}"),
            CoreError::Dependency(e) => write!(f, "dependency error: {e}"),
            CoreError::Unexpected(e) => write!(f, "unexpected error: {e}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::Validation(err)
    }
}

impl From<AuthenticationError> for CoreError {
    fn from(err: AuthenticationError) -> Self {
        CoreError::Authentication(err)
    }
}

impl From<AuthorizationError> for CoreError {
    fn from(err: AuthorizationError) -> Self {
        CoreError::Authorization(err)
    }
}

impl From<StateError> for CoreError {
    fn from(err: StateError) -> Self {
        CoreError::State(err)
    }
}

impl From<DependencyError> for CoreError {
    fn from(err: DependencyError) -> Self {
        CoreError::Dependency(err)
    }
}

impl From<UnexpectedError> for CoreError {
    fn from(err: UnexpectedError) -> Self {
        CoreError::Unexpected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_inner_message() {
        let err = CoreError::State(StateError::SessionExpired);
        assert_eq!(err.to_string(), "state error: session has expired");
    }

    #[test]
    fn is_authentication_matches_only_that_variant() {
        let err = CoreError::Authentication(AuthenticationError::WrongPassword);
        assert!(err.is_authentication());
        assert!(!err.is_validation());
    }
}
