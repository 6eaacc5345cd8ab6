use thiserror::Error;

/// Errors surfaced while rendering a compiled query.
///
/// All variants are detected synchronously during [`Query::render`] and
/// abort the whole call; no partial output is ever returned.
///
/// [`Query::render`]: crate::Query::render
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    /// A placeholder references an argument position that was not supplied.
    /// Carries the 1-based placeholder index.
    #[error("insufficient arguments: no value for placeholder ${0}")]
    InsufficientArguments(usize),

    /// The argument's kind has no defined literal rendering.
    /// Carries the kind name.
    #[error("invalid argument type: {0}")]
    UnsupportedType(&'static str),

    /// An argument was supplied but never referenced by any placeholder.
    /// Carries its 0-based position in the argument list.
    #[error("unused argument: {0}")]
    UnusedArgument(usize),
}

/// Result type for sanitize operations.
pub type Result<T> = core::result::Result<T, SanitizeError>;
