//! Error types for option scanning and its helpers

use thiserror::Error;

/// Errors produced around the option scanner
///
/// The scanner's probes themselves never fail; they answer with `bool` or a
/// [`MatchOutcome`](crate::MatchOutcome). These variants are what a caller
/// turns those answers into once it decides a miss is fatal, plus the
/// failures of the collaborating helpers.
#[derive(Debug, Error)]
pub enum CloError {
    /// A token was not recognized by any option
    #[error("Unrecognized argument '{0}'")]
    UnrecognizedArgument(String),

    /// An option that requires a value was the last token
    #[error("Missing value for option '{0}'")]
    MissingValue(String),

    /// A value was present but could not be converted to the option's type
    #[error("Invalid value '{text}' for option '{keyword}'")]
    InvalidValue {
        /// The option keyword that matched
        keyword: String,
        /// The value text that failed to convert
        text: String,
    },

    /// A version string without a leading numeric component
    #[error("Invalid version '{0}': expected 'major[.minor[.patch]]'")]
    InvalidVersion(String),

    /// An I/O operation reported failure
    #[error("{context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for option scanning operations
pub type CloResult<T> = Result<T, CloError>;
