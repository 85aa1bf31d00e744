//! Parsed chat message records.
//!
//! A [`MessageRecord`] is created for every stamp line of a transcript. Lines
//! without a stamp are appended to the most recent record, so the message
//! text keeps its original line breaks.
//!
//! # Example
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let mut record = MessageRecord::new("Alice", "Hello\n", ts);
//! record.push_continuation("there\n");
//!
//! assert_eq!(record.message(), "Hello\nthere\n");
//! assert_eq!(record.line_count(), 2);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One chat message as it appears in the export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `speaker` | `String` | Name shown before the first `:` of the stamp line |
/// | `message` | `String` | Message body, continuation lines and line terminators included |
/// | `timestamp` | `NaiveDateTime` | Local time from the stamp, minute precision |
///
/// Timestamps carry no timezone; exports record the phone's wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Display name of the author.
    pub speaker: String,

    /// Message text.
    pub message: String,

    /// When the message was sent.
    pub timestamp: NaiveDateTime,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        speaker: impl Into<String>,
        message: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
            timestamp,
        }
    }

    /// Appends a raw continuation line to the message body.
    pub fn push_continuation(&mut self, line: &str) {
        self.message.push_str(line);
    }

    /// Returns the speaker name.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Number of physical lines the message spans.
    pub fn line_count(&self) -> usize {
        self.message.lines().count().max(1)
    }
}
