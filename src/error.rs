//! Unified error types for chatreplay.
//!
//! Every fallible operation in the library returns [`ChatError`]. The two
//! structural failures a caller has to tell apart are separate variants:
//!
//! - [`ChatError::NotFound`] - the archive directory holds no chat transcript
//! - [`ChatError::TamperedInput`] - the transcript is not a genuine export
//!
//! Missing attachment or contact files are not errors: the affected message
//! degrades and parsing continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatreplay operations.
///
/// # Example
///
/// ```rust
/// use chatreplay::error::Result;
/// use chatreplay::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatError>;

/// The error type for all chatreplay operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No chat transcript was found in the archive directory.
    ///
    /// The archive is either not a chat export or was extracted somewhere else.
    #[error("No chat transcript matching '{prefix}*.{extension}' found in {}", dir.display())]
    NotFound {
        /// Directory that was searched
        dir: PathBuf,
        /// File name prefix that was expected
        prefix: String,
        /// File extension that was expected (without dot)
        extension: String,
    },

    /// The transcript does not have the structure of a genuine export.
    ///
    /// Raised when the first line is not the start of a message, or when a
    /// logical message has no parsable `date, time - ` stamp.
    #[error("Invalid transcript structure at message {line}: {reason}")]
    TamperedInput {
        /// 1-based index of the offending line or logical message
        line: usize,
        /// Description of what's wrong
        reason: String,
    },

    /// A viewer name was selected that never sent a message in the chat.
    #[error("'{name}' is not a participant of this chat")]
    UnknownSender {
        /// The rejected name
        name: String,
    },

    /// The requested output format is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error while converting output.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatError {
    /// Creates a not-found error for the given directory and lookup pattern.
    pub fn not_found(
        dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        ChatError::NotFound {
            dir: dir.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Creates a tampered-input error.
    pub fn tampered(line: usize, reason: impl Into<String>) -> Self {
        ChatError::TamperedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatError::Io(_))
    }

    /// Returns `true` if no transcript was found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatError::NotFound { .. })
    }

    /// Returns `true` if the transcript structure was rejected.
    pub fn is_tampered(&self) -> bool {
        matches!(self, ChatError::TamperedInput { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
