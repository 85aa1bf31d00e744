//! Unified error types for chatstats.
//!
//! Every failure in the pipeline is reported through [`ChatstatsError`].
//! Nothing is recovered internally: a malformed transcript or a mismatched
//! locale aborts the whole analysis, and no partial tables are produced.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidInput`](ChatstatsError::InvalidInput) | path validation before anything is read |
//! | [`UnsupportedLocale`](ChatstatsError::UnsupportedLocale) | parsing a locale name |
//! | [`TimestampParse`](ChatstatsError::TimestampParse) | a stamp line that is not a real date/time |
//! | [`OrphanContinuation`](ChatstatsError::OrphanContinuation) | a continuation line before any stamp line |
//! | [`MalformedLine`](ChatstatsError::MalformedLine) | a stamp line without `speaker: message` |

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input path was rejected before its content was read.
    ///
    /// This happens when:
    /// - The path does not have a `.txt` extension
    /// - The path does not exist
    /// - The path is not a regular file
    #[error("Invalid input '{}': {reason}", path.display())]
    InvalidInput {
        /// The rejected path
        path: PathBuf,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The locale name is not one of the supported variants.
    #[error("Unsupported locale '{input}'. Expected one of: EU, NA, JP")]
    UnsupportedLocale {
        /// The locale string that was provided
        input: String,
    },

    /// A stamp-shaped line does not hold a valid calendar date/time.
    ///
    /// Usually a sign that the transcript was exported with a different
    /// locale than the one configured (e.g. month 13 when reading NA as EU).
    #[error("Invalid timestamp '{text}' on line {line}: {source}")]
    TimestampParse {
        /// 1-based line number in the input
        line: usize,
        /// The matched stamp text
        text: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A line without a stamp appeared before the first message.
    #[error("Continuation line {line} has no preceding message")]
    OrphanContinuation {
        /// 1-based line number in the input
        line: usize,
    },

    /// A stamp line whose body has no `speaker: message` separator.
    #[error("Line {line} has no 'speaker: message' separator: {content:?}")]
    MalformedLine {
        /// 1-based line number in the input
        line: usize,
        /// The offending line
        content: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
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

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an invalid input error.
    pub fn invalid_input(path: impl Into<PathBuf>, reason: &'static str) -> Self {
        ChatstatsError::InvalidInput {
            path: path.into(),
            reason,
        }
    }

    /// Creates an unsupported locale error.
    pub fn unsupported_locale(input: impl Into<String>) -> Self {
        ChatstatsError::UnsupportedLocale {
            input: input.into(),
        }
    }

    /// Creates a timestamp parse error.
    pub fn timestamp_parse(line: usize, text: impl Into<String>, source: chrono::ParseError) -> Self {
        ChatstatsError::TimestampParse {
            line,
            text: text.into(),
            source,
        }
    }

    /// Creates an orphan continuation error.
    pub fn orphan_continuation(line: usize) -> Self {
        ChatstatsError::OrphanContinuation { line }
    }

    /// Creates a malformed line error.
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        ChatstatsError::MalformedLine {
            line,
            content: content.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the input path was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatstatsError::InvalidInput { .. })
    }

    /// Returns `true` if the locale name was not recognised.
    pub fn is_unsupported_locale(&self) -> bool {
        matches!(self, ChatstatsError::UnsupportedLocale { .. })
    }

    /// Returns `true` if this error came from the transcript content itself.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ChatstatsError::TimestampParse { .. }
                | ChatstatsError::OrphanContinuation { .. }
                | ChatstatsError::MalformedLine { .. }
        )
    }

    /// Returns the 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ChatstatsError::TimestampParse { line, .. }
            | ChatstatsError::OrphanContinuation { line }
            | ChatstatsError::MalformedLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
