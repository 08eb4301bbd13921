use error_stack::Report;
use thiserror::Error;

// Error message prefixes
const MSG_INVALID_PREFIX: &str = "Invalid";

/// Result type for the `syb` library
pub type Result<T> = std::result::Result<T, Report<Error>>;

/// Errors a traversal or its configuration can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration value could not be used
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// The subject nests deeper than the configured limit
    #[error("Recursion limit of {limit} exceeded while descending into `{type_name}`")]
    RecursionLimitExceeded {
        /// Type whose children would have crossed the limit
        type_name: &'static str,
        /// Configured maximum depth
        limit:     usize,
    },
}

impl Error {
    /// Create an "Invalid X" configuration error
    #[must_use]
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::InvalidConfig(format!("{MSG_INVALID_PREFIX} {what}: {details}"))
    }
}
