//! Complete analysis of one chat export.
//!
//! [`WhatsAppChat`] runs the whole pipeline once, at construction:
//! parse, enrich, then aggregate into daily, weekly and monthly tables.
//! Every instance owns its data; nothing is shared between chats.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::MessageRecord;
use crate::config::ChatConfig;
use crate::core::aggregate::{AggregateRow, Bucket, SpeakerSummary, aggregate, speaker_totals};
use crate::core::enrich::{EmojiCounter, EnrichedRecord, UnicodeEmojiCounter, enrich};
use crate::error::{ChatstatsError, Result};
use crate::parsers::WhatsAppParser;

/// Parsed and aggregated WhatsApp chat.
///
/// # Example
///
/// ```rust
/// use chatstats::{ChatConfig, WhatsAppChat};
///
/// let content = "Messages are end-to-end encrypted.\n\
///                01/02/2023, 10:00 - Alice: Hello\n\
///                there\n\
///                01/02/2023, 10:05 - Bob: Hi! 👋\n";
///
/// let chat = WhatsAppChat::from_text(content, ChatConfig::default())?;
///
/// assert_eq!(chat.len(), 2);
/// assert_eq!(chat.daily().len(), 2);
/// assert_eq!(chat.speakers(), ["Alice", "Bob"]);
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WhatsAppChat {
    config: ChatConfig,
    enriched: Vec<EnrichedRecord>,
    daily: Vec<AggregateRow>,
    weekly: Vec<AggregateRow>,
    monthly: Vec<AggregateRow>,
}

impl WhatsAppChat {
    /// Loads and analyses an export file.
    ///
    /// The path is checked before anything is read: it must have a `.txt`
    /// extension, exist, and be a regular file.
    pub fn open(path: impl AsRef<Path>, config: ChatConfig) -> Result<Self> {
        let path = path.as_ref();
        validate_input(path)?;

        debug!(path = %path.display(), locale = %config.locale, "loading chat export");
        let records = WhatsAppParser::with_config(config).parse(path)?;
        Ok(Self::from_records(records, config, &UnicodeEmojiCounter))
    }

    /// Loads an export file using a locale name (`EU`, `NA` or `JP`).
    ///
    /// The locale is resolved first, so an unsupported name fails without
    /// touching the file system.
    pub fn open_with_locale(path: impl AsRef<Path>, locale: &str) -> Result<Self> {
        let config = ChatConfig::from_locale_name(locale)?;
        Self::open(path, config)
    }

    /// Analyses export content held in memory.
    pub fn from_text(content: &str, config: ChatConfig) -> Result<Self> {
        Self::from_text_with_counter(content, config, &UnicodeEmojiCounter)
    }

    /// Analyses export content with a custom emoji classifier.
    pub fn from_text_with_counter(
        content: &str,
        config: ChatConfig,
        counter: &impl EmojiCounter,
    ) -> Result<Self> {
        let records = WhatsAppParser::with_config(config).parse_str(content)?;
        Ok(Self::from_records(records, config, counter))
    }

    /// Builds the analysis from already parsed records.
    pub fn from_records(
        records: Vec<MessageRecord>,
        config: ChatConfig,
        counter: &impl EmojiCounter,
    ) -> Self {
        let enriched = enrich(records, counter);
        let daily = aggregate(&enriched, Bucket::Day);
        let weekly = aggregate(&enriched, Bucket::Week);
        let monthly = aggregate(&enriched, Bucket::Month);

        debug!(
            messages = enriched.len(),
            daily_rows = daily.len(),
            weekly_rows = weekly.len(),
            monthly_rows = monthly.len(),
            "aggregated chat"
        );

        Self {
            config,
            enriched,
            daily,
            weekly,
            monthly,
        }
    }

    /// Returns the configuration the chat was parsed with.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the enriched messages in file order.
    pub fn enriched(&self) -> &[EnrichedRecord] {
        &self.enriched
    }

    /// Iterates over the parsed messages in file order.
    pub fn records(&self) -> impl Iterator<Item = &MessageRecord> {
        self.enriched.iter().map(|e| &e.record)
    }

    /// Daily aggregate table.
    pub fn daily(&self) -> &[AggregateRow] {
        &self.daily
    }

    /// Weekly aggregate table (ISO weeks).
    pub fn weekly(&self) -> &[AggregateRow] {
        &self.weekly
    }

    /// Monthly aggregate table.
    pub fn monthly(&self) -> &[AggregateRow] {
        &self.monthly
    }

    /// Returns the table for `bucket`.
    pub fn aggregate(&self, bucket: Bucket) -> &[AggregateRow] {
        match bucket {
            Bucket::Day => &self.daily,
            Bucket::Week => &self.weekly,
            Bucket::Month => &self.monthly,
        }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.enriched.len()
    }

    /// Returns `true` if the export holds no messages.
    pub fn is_empty(&self) -> bool {
        self.enriched.is_empty()
    }

    /// Distinct speakers, sorted by name.
    pub fn speakers(&self) -> Vec<&str> {
        self.enriched
            .iter()
            .map(|e| e.speaker())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whole-chat totals per speaker.
    pub fn speaker_totals(&self) -> Vec<SpeakerSummary> {
        speaker_totals(&self.enriched)
    }
}

fn validate_input(path: &Path) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(ChatstatsError::invalid_input(path, "expected a .txt file"));
    }
    if !path.exists() {
        return Err(ChatstatsError::invalid_input(path, "file does not exist"));
    }
    if !path.is_file() {
        return Err(ChatstatsError::invalid_input(path, "not a regular file"));
    }
    Ok(())
}
