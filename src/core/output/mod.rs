//! Output writers for aggregate tables.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every format carries the same columns:
//! `bucket_start`, `weekday`, `speaker`, `message_count`,
//! `message_length_sum`, `contains_emoji_mean`.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::WhatsAppChat;
//! use chatstats::config::ChatConfig;
//! use chatstats::core::output::{to_csv, write_json};
//!
//! let chat = WhatsAppChat::open("chat.txt", ChatConfig::default())?;
//!
//! write_json(chat.weekly(), "weekly.json")?;
//! let csv = to_csv(chat.daily())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
