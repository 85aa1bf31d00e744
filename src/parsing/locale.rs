//! Locale-specific stamp formats for WhatsApp exports.
//!
//! Every message in an export starts with a date/time stamp whose layout
//! depends on the phone's locale:
//!
//! - EU: `31/12/2024, 23:59 - Alice: Message`
//! - NA: `12/31/2024, 23:59 - Alice: Message`
//! - JP: `2024/12/31, 23:59 - Alice: Message`
//!
//! EU and NA stamps have the same shape, so a transcript read with the wrong
//! one of the two either fails calendar validation or silently swaps day and
//! month. The locale must be chosen by the caller; it is never guessed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChatstatsError;

/// Supported stamp locale variants.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::LocaleFormat;
///
/// let locale: LocaleFormat = "jp".parse().unwrap();
/// assert_eq!(locale, LocaleFormat::Jp);
/// assert!("UK".parse::<LocaleFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocaleFormat {
    /// Day first: `DD/MM/YYYY, HH:MM`
    #[default]
    #[serde(rename = "EU", alias = "eu")]
    Eu,
    /// Month first: `MM/DD/YYYY, HH:MM`
    #[serde(rename = "NA", alias = "na")]
    Na,
    /// Year first: `YYYY/MM/DD, HH:MM`
    #[serde(rename = "JP", alias = "jp")]
    Jp,
}

impl LocaleFormat {
    /// Returns the anchored regex pattern matching this locale's stamp.
    pub fn pattern(self) -> &'static str {
        match self {
            LocaleFormat::Eu | LocaleFormat::Na => r"^[0-9]{2}/[0-9]{2}/[0-9]{4}, [0-9]{2}:[0-9]{2}",
            LocaleFormat::Jp => r"^[0-9]{4}/[0-9]{2}/[0-9]{2}, [0-9]{2}:[0-9]{2}",
        }
    }

    /// Returns the chrono template for the matched stamp text.
    pub fn template(self) -> &'static str {
        match self {
            LocaleFormat::Eu => "%d/%m/%Y, %H:%M",
            LocaleFormat::Na => "%m/%d/%Y, %H:%M",
            LocaleFormat::Jp => "%Y/%m/%d, %H:%M",
        }
    }

    /// Width in characters of the stamp prefix, separator included.
    ///
    /// `"31/12/2024, 23:59 - "` is 20 characters, and so is the JP layout.
    pub fn stamp_width(self) -> usize {
        match self {
            LocaleFormat::Eu | LocaleFormat::Na | LocaleFormat::Jp => 20,
        }
    }

    /// Returns all locale variants.
    pub fn all() -> &'static [LocaleFormat] {
        &[LocaleFormat::Eu, LocaleFormat::Na, LocaleFormat::Jp]
    }

    /// Returns all accepted locale names.
    pub fn all_names() -> &'static [&'static str] {
        &["EU", "NA", "JP"]
    }
}

impl fmt::Display for LocaleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleFormat::Eu => write!(f, "EU"),
            LocaleFormat::Na => write!(f, "NA"),
            LocaleFormat::Jp => write!(f, "JP"),
        }
    }
}

impl FromStr for LocaleFormat {
    type Err = ChatstatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EU" => Ok(LocaleFormat::Eu),
            "NA" => Ok(LocaleFormat::Na),
            "JP" => Ok(LocaleFormat::Jp),
            _ => Err(ChatstatsError::unsupported_locale(s)),
        }
    }
}

/// Compiled stamp matcher for one locale.
///
/// Built once per parser and owned by it.
#[derive(Debug, Clone)]
pub struct StampFormat {
    locale: LocaleFormat,
    regex: Regex,
}

impl StampFormat {
    /// Compiles the stamp matcher for `locale`.
    pub fn new(locale: LocaleFormat) -> Self {
        let regex = Regex::new(locale.pattern()).expect("locale stamp patterns are valid regexes");
        Self { locale, regex }
    }

    /// Returns the locale this matcher was built for.
    pub fn locale(&self) -> LocaleFormat {
        self.locale
    }

    /// Returns the stamp text if `line` starts with one.
    pub fn match_stamp<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex.find(line).map(|m| m.as_str())
    }

    /// Parses matched stamp text into a timestamp.
    pub fn parse_timestamp(&self, stamp: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(stamp, self.locale.template())
    }

    /// Returns the part of a stamp line after the fixed-width prefix.
    ///
    /// `None` when the line is shorter than the prefix.
    pub fn body<'a>(&self, line: &'a str) -> Option<&'a str> {
        let width = self.locale.stamp_width();
        if width == 0 {
            return Some(line);
        }
        line.char_indices()
            .nth(width - 1)
            .map(|(idx, ch)| &line[idx + ch.len_utf8()..])
    }
}

impl From<LocaleFormat> for StampFormat {
    fn from(locale: LocaleFormat) -> Self {
        Self::new(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_locale_from_str() {
        assert_eq!("EU".parse::<LocaleFormat>().unwrap(), LocaleFormat::Eu);
        assert_eq!("na".parse::<LocaleFormat>().unwrap(), LocaleFormat::Na);
        assert_eq!(" Jp ".parse::<LocaleFormat>().unwrap(), LocaleFormat::Jp);

        let err = "UK".parse::<LocaleFormat>().unwrap_err();
        assert!(err.is_unsupported_locale());
    }

    #[test]
    fn test_locale_display_roundtrips_names() {
        for locale in LocaleFormat::all() {
            assert_eq!(locale.to_string().parse::<LocaleFormat>().unwrap(), *locale);
        }
        assert_eq!(LocaleFormat::all().len(), LocaleFormat::all_names().len());
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&LocaleFormat::Na).unwrap();
        assert_eq!(json, "\"NA\"");

        let parsed: LocaleFormat = serde_json::from_str("\"jp\"").unwrap();
        assert_eq!(parsed, LocaleFormat::Jp);
    }

    #[test]
    fn test_match_stamp_eu() {
        let stamp = StampFormat::new(LocaleFormat::Eu);
        assert_eq!(
            stamp.match_stamp("31/12/2024, 23:59 - Alice: Hi"),
            Some("31/12/2024, 23:59")
        );
        assert_eq!(stamp.match_stamp("Alice: 31/12/2024, 23:59"), None);
        assert_eq!(stamp.match_stamp("2024/12/31, 23:59 - Alice: Hi"), None);
    }

    #[test]
    fn test_match_stamp_jp() {
        let stamp = StampFormat::new(LocaleFormat::Jp);
        assert_eq!(
            stamp.match_stamp("2024/12/31, 23:59 - Alice: Hi"),
            Some("2024/12/31, 23:59")
        );
        assert_eq!(stamp.match_stamp("31/12/2024, 23:59 - Alice: Hi"), None);
    }

    #[test]
    fn test_parse_timestamp_day_month_order() {
        let eu = StampFormat::new(LocaleFormat::Eu);
        let na = StampFormat::new(LocaleFormat::Na);

        let ts = eu.parse_timestamp("01/02/2023, 10:00").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 2, 1));

        let ts = na.parse_timestamp("01/02/2023, 10:00").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 1, 2));
        assert_eq!((ts.hour(), ts.minute()), (10, 0));
    }

    #[test]
    fn test_parse_timestamp_rejects_impossible_dates() {
        let na = StampFormat::new(LocaleFormat::Na);
        assert!(na.parse_timestamp("31/12/2024, 23:59").is_err());

        let eu = StampFormat::new(LocaleFormat::Eu);
        assert!(eu.parse_timestamp("30/02/2024, 10:00").is_err());
        assert!(eu.parse_timestamp("01/01/2024, 25:00").is_err());
    }

    #[test]
    fn test_body_skips_fixed_width_prefix() {
        let stamp = StampFormat::new(LocaleFormat::Eu);
        assert_eq!(
            stamp.body("31/12/2024, 23:59 - Alice: Hi\n"),
            Some("Alice: Hi\n")
        );
        assert_eq!(stamp.body("31/12/2024, 23:59 - "), Some(""));
        assert_eq!(stamp.body("31/12/2024, 23:59"), None);
    }

    #[test]
    fn test_body_counts_characters_not_bytes() {
        // Narrow no-break space around the dash, as some Android exports use.
        let stamp = StampFormat::new(LocaleFormat::Eu);
        let line = "31/12/2024, 23:59\u{202f}-\u{202f}Alice: Hi";
        assert_eq!(stamp.body(line), Some("Alice: Hi"));
    }
}
