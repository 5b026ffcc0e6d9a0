//! Error types for the jargon library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`JargonError`].
//!
//! # Examples
//!
//! ```
//! use jargon::error::{JargonError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(JargonError::dictionary("phrase \"...\" contains no words"))
//! }
//!
//! match build() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for jargon operations.
///
/// Token streams surface these as their terminal `Err` item; tokens already
/// delivered before the error are not retracted.
#[derive(Error, Debug)]
pub enum JargonError {
    /// I/O errors from the underlying byte source or sink
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte source is not valid UTF-8
    #[error("Decode error: invalid UTF-8 at byte offset {offset}")]
    Decode {
        /// Byte offset of the first byte of the invalid sequence
        offset: u64,
    },

    /// Dictionary construction errors (bad phrases, unreadable files)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Errors reported by the markup tokenizer
    #[error("Markup error: {0}")]
    Markup(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with JargonError.
pub type Result<T> = std::result::Result<T, JargonError>;

impl JargonError {
    /// Create a new decode error at the given byte offset.
    pub fn decode(offset: u64) -> Self {
        JargonError::Decode { offset }
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        JargonError::Dictionary(msg.into())
    }

    /// Create a new markup error.
    pub fn markup<S: Into<String>>(msg: S) -> Self {
        JargonError::Markup(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = JargonError::dictionary("no words");
        assert_eq!(error.to_string(), "Dictionary error: no words");

        let error = JargonError::markup("unexpected end of input");
        assert_eq!(error.to_string(), "Markup error: unexpected end of input");

        let error = JargonError::decode(7);
        assert_eq!(
            error.to_string(),
            "Decode error: invalid UTF-8 at byte offset 7"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let jargon_error = JargonError::from(io_error);

        match jargon_error {
            JargonError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
