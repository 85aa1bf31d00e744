//! # Chatstats
//!
//! A Rust library for turning WhatsApp chat exports into per-speaker activity
//! tables.
//!
//! ## Overview
//!
//! A WhatsApp `.txt` export is parsed into one record per message, every
//! message is enriched with its weekday, its length and emoji statistics, and
//! the result is aggregated into daily, weekly and monthly tables keyed by
//! `(bucket start, weekday, speaker)`.
//!
//! Three stamp layouts are supported, selected explicitly by the caller:
//!
//! | Locale | Stamp |
//! |--------|-------|
//! | `EU` | `31/01/2023, 21:05 - ` |
//! | `NA` | `01/31/2023, 21:05 - ` |
//! | `JP` | `2023/01/31, 21:05 - ` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chat = WhatsAppChat::open_with_locale("chat.txt", "EU")?;
//!
//!     for row in chat.weekly() {
//!         println!(
//!             "{} {} {}: {} messages",
//!             row.bucket_start, row.weekday, row.speaker, row.message_count
//!         );
//!     }
//!
//!     write_csv(chat.monthly(), "monthly.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`chat`] - [`WhatsAppChat`], the whole pipeline behind one type
//! - [`parsers`] - [`WhatsAppParser`](parsers::WhatsAppParser), transcript to records
//! - [`parsing`] - [`LocaleFormat`](parsing::LocaleFormat) stamp layouts
//! - [`core`] - Enrichment, aggregation and output writers
//! - [`config`] - [`ChatConfig`]
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] `debug` events summarising each parse and
//! aggregation, and never installs a subscriber.

pub mod chat;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use chat::WhatsAppChat;
pub use config::ChatConfig;
pub use error::{ChatstatsError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Pipeline entry point
    pub use crate::WhatsAppChat;
    pub use crate::config::ChatConfig;

    // Parsed message
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::parsers::WhatsAppParser;
    pub use crate::parsing::LocaleFormat;

    // Enrichment and aggregation
    pub use crate::core::aggregate::{
        AggregateRow, Bucket, SpeakerSummary, aggregate, speaker_totals,
    };
    pub use crate::core::enrich::{
        EmojiCounter, EnrichedRecord, UnicodeEmojiCounter, Weekday, enrich,
    };

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
