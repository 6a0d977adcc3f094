//! Error types for rs-readermode.
//!
//! Locating and sanitizing never fail: an absent candidate is an ordinary
//! `None`. Errors are raised only when an [`Extractor`](crate::Extractor) is
//! built from invalid configuration, or when a convenience entry point that
//! must return content finds none.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured CSS selector could not be parsed.
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// The configured noise pattern is not a valid regular expression.
    #[error("Invalid noise pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A configuration document could not be deserialized.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// All locator stages were exhausted without finding a candidate.
    #[error("No extractable content found")]
    NoContent,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
