/// Errors specific to persistence adapter operations.
///
/// Answers "did the database operation succeed?" — never business-logic
/// validation or authentication semantics, which are `core::error`'s job.
#[derive(Debug, Clone)]
pub enum PersistenceError {
    Connection { reason: String },
    UniqueViolation { reason: String },
    Execution { reason: String },
}

impl PersistenceError {
    pub fn connection(reason: impl Into<String>) -> Self {
        Self::Connection { reason: reason.into() }
    }

    pub fn unique_violation(reason: impl Into<String>) -> Self {
        Self::UniqueViolation { reason: reason.into() }
    }

    pub fn execution(reason: impl Into<String>) -> Self {
        Self::Execution { reason: reason.into() }
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection { reason } => write!(f, "database connection error: {reason}"),
            Self::UniqueViolation { reason } => write!(f, "unique constraint violated: {reason}"),
            Self::Execution { reason } => write!(f, "query execution failed: {reason}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return PersistenceError::unique_violation(db_err.message().to_string());
            }
        }
        match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                PersistenceError::connection(err.to_string())
            }
            _ => PersistenceError::execution(err.to_string()),
        }
    }
}
