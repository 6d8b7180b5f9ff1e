//! Error types for the Exude toolkit.
//!
//! Analysis itself never fails: blank input produces an error-shaped
//! [`AnalysisResult`](crate::analysis::result::AnalysisResult) rather than an
//! `Err`. The variants here cover construction (invalid patterns, bad
//! configuration), history persistence, and the command line front end.
//!
//! # Examples
//!
//! ```
//! use exude::error::{ExudeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ExudeError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Exude operations.
#[derive(Error, Debug)]
pub enum ExudeError {
    /// I/O errors (history file, config file, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis pipeline construction errors (invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// History store errors
    #[error("History error: {0}")]
    History(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ExudeError.
pub type Result<T> = std::result::Result<T, ExudeError>;

impl ExudeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ExudeError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ExudeError::Config(msg.into())
    }

    /// Create a new history error.
    pub fn history<S: Into<String>>(msg: S) -> Self {
        ExudeError::History(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ExudeError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ExudeError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ExudeError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = ExudeError::config("max_keywords must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: max_keywords must be positive"
        );

        let error = ExudeError::invalid_argument("unknown analyzer");
        assert_eq!(error.to_string(), "Invalid argument: unknown analyzer");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let exude_error = ExudeError::from(io_error);

        match exude_error {
            ExudeError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
