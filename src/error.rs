//! Error types for the parts-triage library.
//!
//! All fallible operations return [`TriageError`] through the crate-wide
//! [`Result`] alias. Only [`TriageError::InvalidInput`] and load-time
//! configuration errors are expected to reach callers: the scope detector and
//! intent classifier absorb their own failures and substitute low-confidence
//! defaults instead.
//!
//! # Examples
//!
//! ```
//! use parts_triage::error::{Result, TriageError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TriageError::invalid_input("expected a string"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for triage operations.
#[derive(Error, Debug)]
pub enum TriageError {
    /// The caller handed the pipeline something other than text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Keyword tables or pattern configuration are unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured regular expression failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Scope or intent scoring failed internally.
    #[error("Classification error: {0}")]
    Classification(String),

    /// I/O errors (config files, batch input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TriageError.
pub type Result<T> = std::result::Result<T, TriageError>;

impl TriageError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        TriageError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TriageError::Config(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        TriageError::Classification(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TriageError::invalid_input("expected a string, got number");
        assert_eq!(
            error.to_string(),
            "Invalid input: expected a string, got number"
        );

        let error = TriageError::config("empty keyword phrase");
        assert_eq!(error.to_string(), "Configuration error: empty keyword phrase");

        let error = TriageError::classification("no tables");
        assert_eq!(error.to_string(), "Classification error: no tables");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let triage_error = TriageError::from(io_error);

        match triage_error {
            TriageError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_error = regex::Regex::new("(unclosed").unwrap_err();
        let triage_error = TriageError::from(regex_error);
        assert!(matches!(triage_error, TriageError::Pattern(_)));
    }
}
