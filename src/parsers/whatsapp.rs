//! `WhatsApp` TXT export parser.
//!
//! An export is a plain text file whose first line is a fixed notice, followed
//! by messages of the form:
//!
//! ```text
//! 01/02/2023, 10:00 - Alice: Hello
//! there
//! 01/02/2023, 10:05 - Bob: Hi!
//! ```
//!
//! Lines starting with a stamp open a new message; any other line continues
//! the previous one. The stamp layout is fixed by [`LocaleFormat`] and must be
//! supplied by the caller.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::MessageRecord;
use crate::config::ChatConfig;
use crate::error::{ChatstatsError, Result};
use crate::parsing::{LocaleFormat, StampFormat};

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatstats::parsers::WhatsAppParser;
/// use chatstats::parsing::LocaleFormat;
///
/// let parser = WhatsAppParser::for_locale(LocaleFormat::Eu);
/// let content = "Messages are end-to-end encrypted.\n\
///                01/02/2023, 10:00 - Alice: Hello\n\
///                there\n\
///                01/02/2023, 10:05 - Bob: Hi!\n";
///
/// let records = parser.parse_str(content)?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].message, "Hello\nthere\n");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WhatsAppParser {
    config: ChatConfig,
    stamp: StampFormat,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ChatConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ChatConfig) -> Self {
        Self {
            stamp: StampFormat::new(config.locale),
            config,
        }
    }

    /// Creates a parser for the given locale with otherwise default settings.
    pub fn for_locale(locale: LocaleFormat) -> Self {
        Self::with_config(ChatConfig::for_locale(locale))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Parses an export file.
    ///
    /// The path is not validated here beyond what reading it requires; see
    /// [`WhatsAppChat::open`](crate::WhatsAppChat::open) for the checked entry point.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses export content held in memory.
    ///
    /// `\r\n` and lone `\r` terminators are read as `\n`, so message text
    /// only ever contains `\n` line breaks.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        let content = normalize_newlines(content);
        self.parse_lines(content.split_inclusive('\n'))
    }

    /// Parses a sequence of lines.
    ///
    /// Lines should keep their terminators: continuation lines are appended
    /// to the previous message verbatim.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Vec<MessageRecord>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let skip = usize::from(self.config.skip_header);
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut continuations = 0usize;

        for (idx, line) in lines.into_iter().enumerate().skip(skip) {
            let line_no = idx + 1;

            if let Some(stamp_text) = self.stamp.match_stamp(line) {
                records.push(self.parse_stamp_line(line_no, line, stamp_text)?);
            } else {
                let last = records
                    .last_mut()
                    .ok_or_else(|| ChatstatsError::orphan_continuation(line_no))?;
                last.push_continuation(line);
                continuations += 1;
            }
        }

        debug!(
            locale = %self.config.locale,
            records = records.len(),
            continuations,
            "parsed WhatsApp transcript"
        );

        Ok(records)
    }

    fn parse_stamp_line(
        &self,
        line_no: usize,
        line: &str,
        stamp_text: &str,
    ) -> Result<MessageRecord> {
        let timestamp = self
            .stamp
            .parse_timestamp(stamp_text)
            .map_err(|e| ChatstatsError::timestamp_parse(line_no, stamp_text, e))?;

        let (speaker, message) = self
            .stamp
            .body(line)
            .and_then(split_speaker)
            .ok_or_else(|| ChatstatsError::malformed_line(line_no, line.trim_end()))?;

        Ok(MessageRecord::new(speaker, message, timestamp))
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `speaker: message` on the first colon.
///
/// One space after the colon belongs to the separator and is dropped.
fn split_speaker(body: &str) -> Option<(&str, &str)> {
    let (speaker, message) = body.split_once(':')?;
    Some((speaker, message.strip_prefix(' ').unwrap_or(message)))
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
