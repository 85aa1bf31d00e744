//! Output format selection for aggregate tables.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatstats::Result<()> {
//! use chatstats::format::{OutputFormat, write_to_format};
//! use chatstats::{ChatConfig, WhatsAppChat};
//!
//! let chat = WhatsAppChat::open("chat.txt", ChatConfig::default())?;
//!
//! // Pick the writer from the output file name
//! let format = OutputFormat::from_path("monthly.jsonl")?;
//! write_to_format(chat.monthly(), "monthly.jsonl", format)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::aggregate::AggregateRow;
use crate::error::ChatstatsError;

/// Serialization format for aggregate tables.
///
/// CSV is the default; JSONL is also accepted under the name `ndjson`.
///
/// # Example
///
/// ```rust
/// use chatstats::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines - one JSON object per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Picks the format from the extension of an output path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("weekly.ndjson").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("weekly.xml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_name(ext).ok_or_else(|| {
            ChatstatsError::invalid_format(
                "output",
                format!("no writer for '.{}' files, use .csv, .json or .jsonl", ext),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

/// Names accepted by `FromStr` and [`OutputFormat::from_path`].
const FORMAT_NAMES: [&str; 4] = ["csv", "json", "jsonl", "ndjson"];

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown output format '{}', expected one of: {}",
                s,
                FORMAT_NAMES.join(", ")
            )
        })
    }
}

/// Writes aggregate rows to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    rows: &[AggregateRow],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(rows, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(rows, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(rows, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts aggregate rows to a string in the specified format.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> chatstats::Result<()> {
/// use chatstats::format::{OutputFormat, to_format_string};
/// use chatstats::{ChatConfig, WhatsAppChat};
///
/// let chat = WhatsAppChat::from_text("header\n01/02/2023, 10:00 - Alice: Hi\n", ChatConfig::default())?;
/// let csv = to_format_string(chat.daily(), OutputFormat::Csv)?;
/// assert!(csv.contains("Alice"));
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    rows: &[AggregateRow],
    format: OutputFormat,
) -> Result<String, ChatstatsError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(rows),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(rows),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "{} output needs the '{}' feature",
            format,
            format.required_feature()
        ),
    )
}
