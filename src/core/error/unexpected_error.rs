/// Errors representing invariant violations — situations that should never occur.
///
/// These are programmer errors, not user errors; the HTTP boundary logs them
/// with a stack-adjacent message and returns a generic 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedError {
    pub context: String,
}

impl UnexpectedError {
    pub fn new(context: impl Into<String>) -> Self {
        Self { context: context.into() }
    }
}

impl std::fmt::Display for UnexpectedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "internal invariant violated: {}", self.context)
    }
}
