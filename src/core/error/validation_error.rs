/// Errors for user-correctable input shape problems.
///
/// This answers "is the request well-formed?" — it is never used for
/// credential rejection, which is `AuthenticationError`'s job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField { field: String },
    InvalidEmail { value: String },
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
    InvalidRedirect,
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::InvalidEmail { value: value.into() }
    }

    pub fn password_too_short(min_length: usize) -> Self {
        Self::PasswordTooShort { min_length }
    }

    /// Closed set of `?error=` codes from the external interface (spec §7).
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "invalid_email",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::PasswordTooShort { .. } => "password_weak",
            Self::PasswordMismatch => "password_mismatch",
            Self::InvalidRedirect => "invalid_redirect",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
            Self::InvalidEmail { value } => write!(f, "invalid email: {value}"),
            Self::PasswordTooShort { min_length } => {
                write!(f, "password must be at least {min_length} characters")
            }
            Self::PasswordMismatch => write!(f, "password and confirmation do not match"),
            Self::InvalidRedirect => write!(f, "redirect URL is not permitted"),
        }
    }
}
