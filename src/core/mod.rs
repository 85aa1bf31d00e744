//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`enrich`] - Per-message features (weekday, length, emoji)
//! - [`aggregate`] - Daily, weekly and monthly grouping
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{Bucket, UnicodeEmojiCounter, aggregate, enrich};
//! use chatstats::parsers::WhatsAppParser;
//!
//! let records = WhatsAppParser::new()
//!     .parse_str("header\n01/02/2023, 10:00 - Alice: Hi 🎉\n")?;
//!
//! let enriched = enrich(records, &UnicodeEmojiCounter);
//! let monthly = aggregate(&enriched, Bucket::Month);
//! assert_eq!(monthly[0].contains_emoji_mean, 1.0);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod aggregate;
pub mod enrich;
pub mod output;

pub use aggregate::{
    AggregateRow, Bucket, SpeakerSummary, aggregate, speaker_totals, total_messages,
};
pub use enrich::{EmojiCounter, EnrichedRecord, UnicodeEmojiCounter, Weekday, enrich};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
