use crate::core::error::CoreError;

/// Projects any `CoreError` onto the closed `?error=` code set (spec §7).
/// `AuthorizationError` never actually surfaces from a use case today, but
/// is given a conservative mapping rather than a panic in case one ever does.
pub fn error_code(err: &CoreError) -> &'static str {
    match err {
        CoreError::Validation(e) => e.code(),
        CoreError::Authentication(_) => "invalid_credentials",
        CoreError::Authorization(_) => "invalid_credentials",
        CoreError::State(e) => e.code(),
        CoreError::Dependency(_) | CoreError::Unexpected(_) => "internal",
    }
}

/// Data-store and programmer-error failures fail closed (spec §7): they
/// must never be rendered as a `?error=` redirect and instead become a
/// generic 500.
pub fn is_fail_closed(err: &CoreError) -> bool {
    matches!(err, CoreError::Dependency(_) | CoreError::Unexpected(_))
}
