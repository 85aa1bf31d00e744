//! Per-message derived features.
//!
//! [`enrich`] turns parsed [`MessageRecord`]s into [`EnrichedRecord`]s carrying
//! the weekday, the character length and emoji statistics of each message.
//! Emoji detection sits behind the [`EmojiCounter`] trait; the default
//! [`UnicodeEmojiCounter`] is backed by the `emojis` database.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::MessageRecord;

/// Day of the week, Monday first.
///
/// Serializes as the full English name (`"Monday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Days since Monday (Monday = 0).
    pub fn index(self) -> u32 {
        chrono::Weekday::from(self).num_days_from_monday()
    }

    /// Returns all weekdays, Monday first.
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts emoji glyphs in text.
///
/// Implementations must be total: text without emoji yields 0.
/// Any `Fn(&str) -> usize` closure is an `EmojiCounter`.
pub trait EmojiCounter {
    /// Returns the number of emoji in `text`.
    fn count(&self, text: &str) -> usize;
}

impl<F> EmojiCounter for F
where
    F: Fn(&str) -> usize,
{
    fn count(&self, text: &str) -> usize {
        self(text)
    }
}

/// Emoji counter backed by the Unicode emoji list.
///
/// Text is split into extended grapheme clusters, so ZWJ sequences, flags,
/// keycaps and skin-tone variants each count as a single emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiCounter;

impl EmojiCounter for UnicodeEmojiCounter {
    fn count(&self, text: &str) -> usize {
        text.graphemes(true)
            .filter(|g| emojis::get(g).is_some())
            .count()
    }
}

/// A message with its derived features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The parsed message.
    #[serde(flatten)]
    pub record: MessageRecord,

    /// Day of the week of the timestamp.
    pub weekday: Weekday,

    /// Length of the message in characters, line breaks included.
    pub message_length: usize,

    /// Number of emoji in the message.
    pub emoji_count: usize,

    /// `true` when `emoji_count > 0`.
    pub contains_emoji: bool,
}

impl EnrichedRecord {
    /// Derives the features of `record`.
    pub fn from_record(record: MessageRecord, counter: &impl EmojiCounter) -> Self {
        let emoji_count = counter.count(&record.message);
        Self {
            weekday: record.timestamp.weekday().into(),
            message_length: record.message.chars().count(),
            emoji_count,
            contains_emoji: emoji_count > 0,
            record,
        }
    }

    /// Returns the speaker name.
    pub fn speaker(&self) -> &str {
        &self.record.speaker
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.record.timestamp
    }

    /// Returns the calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.record.timestamp.date()
    }
}

/// Derives features for every record, preserving order.
pub fn enrich(records: Vec<MessageRecord>, counter: &impl EmojiCounter) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| EnrichedRecord::from_record(record, counter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> MessageRecord {
        // 2023-02-01 is a Wednesday
        let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new("Alice", message, ts)
    }

    #[test]
    fn test_weekday_names_and_order() {
        let names: Vec<&str> = Weekday::all().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert!(Weekday::Monday < Weekday::Sunday);
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn test_weekday_chrono_conversion() {
        for day in Weekday::all() {
            let chrono_day: chrono::Weekday = (*day).into();
            assert_eq!(Weekday::from(chrono_day), *day);
        }
    }

    #[test]
    fn test_weekday_serializes_full_name() {
        assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"Friday\"");
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_unicode_counter() {
        let counter = UnicodeEmojiCounter;
        assert_eq!(counter.count("no emoji here"), 0);
        assert_eq!(counter.count(""), 0);
        assert_eq!(counter.count("party 🎉"), 1);
        assert_eq!(counter.count("🎉🔥😀"), 3);
        assert_eq!(counter.count("family 👨‍👩‍👧 time"), 1);
    }

    #[test]
    fn test_closure_counter() {
        let counter = |text: &str| text.matches('*').count();
        assert_eq!(counter.count("a*b*c"), 2);
    }

    #[test]
    fn test_enrich_features() {
        let enriched = EnrichedRecord::from_record(record("Hi 😀\nthere\n"), &UnicodeEmojiCounter);
        assert_eq!(enriched.weekday, Weekday::Wednesday);
        assert_eq!(enriched.message_length, 11);
        assert_eq!(enriched.emoji_count, 1);
        assert!(enriched.contains_emoji);
        assert_eq!(enriched.speaker(), "Alice");
        assert_eq!(enriched.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }

    #[test]
    fn test_contains_emoji_is_clamped() {
        let enriched = EnrichedRecord::from_record(record("😀😀😀"), &UnicodeEmojiCounter);
        assert_eq!(enriched.emoji_count, 3);
        assert!(enriched.contains_emoji);

        let plain = EnrichedRecord::from_record(record("plain"), &UnicodeEmojiCounter);
        assert_eq!(plain.emoji_count, 0);
        assert!(!plain.contains_emoji);
    }

    #[test]
    fn test_length_counts_characters() {
        let enriched = EnrichedRecord::from_record(record("héllo\n"), &UnicodeEmojiCounter);
        assert_eq!(enriched.message_length, 6);
    }

    #[test]
    fn test_enrich_preserves_order() {
        let records = vec![record("a"), record("b"), record("c")];
        let enriched = enrich(records, &UnicodeEmojiCounter);
        let messages: Vec<&str> = enriched.iter().map(|e| e.record.message.as_str()).collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[test]
    fn test_enriched_serialization_is_flat() {
        let enriched = EnrichedRecord::from_record(record("Hi"), &UnicodeEmojiCounter);
        let json = serde_json::to_string(&enriched).unwrap();
        assert!(json.contains("\"speaker\":\"Alice\""));
        assert!(json.contains("\"weekday\":\"Wednesday\""));
        assert!(json.contains("\"contains_emoji\":false"));
    }
}
