//! Error types for cursos-db

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// cursos-db error types
#[derive(Error, Debug)]
pub enum Error {
    /// Query argument violates an operation's contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dataset row could not be parsed into a course record
    #[error("Dataset parse error: {0}")]
    ParseError(String),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
