//! Error types for redirect resolution.

use thiserror::Error;

/// Errors for redirect lookup and form completion.
///
/// A keyword that is simply absent from the list is answered with an
/// ephemeral notice, not an error; these variants cover genuine failures
/// and defended form submissions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The redirect list could not be fetched or decoded.
    #[error("redirect source unavailable: {0}")]
    Source(String),

    /// A form was submitted for a key absent from the cache.
    #[error("unknown redirect '{0}'")]
    UnknownRedirect(String),

    /// A required form field was not submitted.
    #[error("missing required field '{field}' for redirect '{redirect}'")]
    MissingField {
        /// Redirect key.
        redirect: String,
        /// Missing field name.
        field: String,
    },
}

/// Errors for deep-link construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The configured base URL could not be parsed.
    #[error("invalid link base URL '{base}': {reason}")]
    InvalidBase {
        /// The rejected base URL text.
        base: String,
        /// Parse failure reason.
        reason: String,
    },

    /// The configured base URL cannot carry a path, such as a `data:` URL.
    #[error("link base URL '{0}' cannot be extended with a path")]
    CannotBeABase(String),
}
