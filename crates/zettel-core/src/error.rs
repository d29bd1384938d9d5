//! Error types for the zettel pipeline.

use thiserror::Error;

/// Result type alias using the zettel Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for zettel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Analysis backend returned malformed or unusable output.
    ///
    /// Recoverable: callers fall back to default metadata instead of
    /// aborting the run.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A document store payload had an unexpected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(String),

    /// Archive write or existence check failed.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Ledger persistence failed.
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// HTTP/network request failed.
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

impl Error {
    /// True for failures the pipeline absorbs with default metadata
    /// rather than marking the note failed.
    pub fn is_recoverable_analysis(&self) -> bool {
        matches!(self, Error::Analysis(_))
    }
}
