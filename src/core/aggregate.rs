//! Time-bucketed aggregation of enriched messages.
//!
//! All three views (daily, weekly, monthly) go through the same grouping
//! function: records are keyed by `(bucket start, weekday, speaker)` and each
//! group yields one [`AggregateRow`].
//!
//! Bucket boundaries:
//! - [`Bucket::Day`]: calendar date
//! - [`Bucket::Week`]: ISO week, Monday to Sunday, labelled by its Monday
//! - [`Bucket::Month`]: calendar month, labelled by its first day

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::enrich::{EnrichedRecord, Weekday};

/// Aggregation granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// One bucket per calendar date
    Day,
    /// One bucket per ISO week (Monday start)
    Week,
    /// One bucket per calendar month
    Month,
}

impl Bucket {
    /// Returns the first date of the bucket containing `date`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::core::Bucket;
    /// use chrono::NaiveDate;
    ///
    /// // 2023-02-01 is a Wednesday
    /// let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
    /// assert_eq!(Bucket::Day.start(date), date);
    /// assert_eq!(Bucket::Week.start(date), NaiveDate::from_ymd_opt(2023, 1, 30).unwrap());
    /// assert_eq!(Bucket::Month.start(date), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    /// ```
    pub fn start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Bucket::Day => date,
            Bucket::Week => date - Days::new(u64::from(date.weekday().num_days_from_monday())),
            Bucket::Month => date - Days::new(u64::from(date.day0())),
        }
    }

    /// Human-readable label for the bucket starting at `start`.
    ///
    /// `2023-02-01` (day), `2023-W05` (week), `2023-02` (month).
    pub fn label(self, start: NaiveDate) -> String {
        match self {
            Bucket::Day => start.format("%Y-%m-%d").to_string(),
            Bucket::Week => start.format("%G-W%V").to_string(),
            Bucket::Month => start.format("%Y-%m").to_string(),
        }
    }

    /// Returns all granularities, finest first.
    pub fn all() -> &'static [Bucket] {
        &[Bucket::Day, Bucket::Week, Bucket::Month]
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Day => write!(f, "daily"),
            Bucket::Week => write!(f, "weekly"),
            Bucket::Month => write!(f, "monthly"),
        }
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Bucket::Day),
            "w" | "week" | "weekly" => Ok(Bucket::Week),
            "m" | "month" | "monthly" => Ok(Bucket::Month),
            _ => Err(format!(
                "Unknown bucket: '{}'. Expected one of: day, week, month",
                s
            )),
        }
    }
}

/// Statistics for one `(bucket, weekday, speaker)` group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// First date of the time bucket.
    pub bucket_start: NaiveDate,

    /// Weekday shared by every message in the group.
    pub weekday: Weekday,

    /// Speaker shared by every message in the group.
    pub speaker: String,

    /// Number of messages.
    pub message_count: usize,

    /// Sum of message lengths in characters.
    pub message_length_sum: usize,

    /// Fraction of messages containing at least one emoji, in `[0, 1]`.
    pub contains_emoji_mean: f64,
}

impl AggregateRow {
    /// Average message length in characters.
    pub fn mean_message_length(&self) -> f64 {
        if self.message_count == 0 {
            return 0.0;
        }
        self.message_length_sum as f64 / self.message_count as f64
    }
}

/// Running totals for one group.
#[derive(Debug, Clone, Copy, Default)]
struct GroupStats {
    count: usize,
    length_sum: usize,
    emoji_messages: usize,
    emoji_sum: usize,
}

impl GroupStats {
    fn add(&mut self, record: &EnrichedRecord) {
        self.count += 1;
        self.length_sum += record.message_length;
        self.emoji_sum += record.emoji_count;
        if record.contains_emoji {
            self.emoji_messages += 1;
        }
    }

    fn emoji_mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.emoji_messages as f64 / self.count as f64
    }
}

/// Groups `records` by `(bucket start, weekday, speaker)`.
///
/// Rows come out ordered by bucket, then weekday (Monday first), then
/// speaker. Only non-empty groups produce a row.
pub fn aggregate(records: &[EnrichedRecord], bucket: Bucket) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<(NaiveDate, Weekday, &str), GroupStats> = BTreeMap::new();

    for record in records {
        let key = (bucket.start(record.date()), record.weekday, record.speaker());
        groups.entry(key).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|((bucket_start, weekday, speaker), stats)| AggregateRow {
            bucket_start,
            weekday,
            speaker: speaker.to_string(),
            message_count: stats.count,
            message_length_sum: stats.length_sum,
            contains_emoji_mean: stats.emoji_mean(),
        })
        .collect()
}

/// Total message count across `rows`.
pub fn total_messages(rows: &[AggregateRow]) -> usize {
    rows.iter().map(|row| row.message_count).sum()
}

/// Whole-chat totals for one speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub speaker: String,
    pub message_count: usize,
    pub message_length_sum: usize,
    pub emoji_count: usize,
    pub contains_emoji_mean: f64,
}

/// Per-speaker totals over the whole chat, ordered by speaker name.
pub fn speaker_totals(records: &[EnrichedRecord]) -> Vec<SpeakerSummary> {
    let mut groups: BTreeMap<&str, GroupStats> = BTreeMap::new();

    for record in records {
        groups.entry(record.speaker()).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(speaker, stats)| SpeakerSummary {
            speaker: speaker.to_string(),
            message_count: stats.count,
            message_length_sum: stats.length_sum,
            emoji_count: stats.emoji_sum,
            contains_emoji_mean: stats.emoji_mean(),
        })
        .collect()
}
