//! Error types for the Textalyzer library.
//!
//! All errors are represented by the [`TextalyzerError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use textalyzer::error::{Result, TextalyzerError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextalyzerError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Textalyzer operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum TextalyzerError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, strategy execution)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Morphological capability failures, identifying the offending word
    #[error("Morphology error for word '{word}': {reason}")]
    Morphology {
        /// The surface word that could not be lemmatized
        word: String,
        /// Why the capability rejected it
        reason: String,
    },

    /// Dictionary-related errors (malformed lemma groups, bad entries)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextalyzerError.
pub type Result<T> = std::result::Result<T, TextalyzerError>;

impl TextalyzerError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextalyzerError::Analysis(msg.into())
    }

    /// Create a new morphology error for the given word.
    pub fn morphology<W: Into<String>, R: Into<String>>(word: W, reason: R) -> Self {
        TextalyzerError::Morphology {
            word: word.into(),
            reason: reason.into(),
        }
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        TextalyzerError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextalyzerError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextalyzerError::Other(msg.into())
    }
}
