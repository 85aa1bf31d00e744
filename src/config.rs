//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! serializable so they can be stored next to the exports they describe.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::ChatConfig;
//! use chatstats::parsing::LocaleFormat;
//!
//! let config = ChatConfig::new()
//!     .with_locale(LocaleFormat::Na)
//!     .with_skip_header(false);
//!
//! assert_eq!(config.locale, LocaleFormat::Na);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parsing::LocaleFormat;

/// Configuration for WhatsApp transcript parsing.
///
/// Exports start with a fixed notice line (the end-to-end encryption banner)
/// that carries no message data, so the first line is skipped by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Stamp layout used by the export (default: EU)
    #[serde(default)]
    pub locale: LocaleFormat,

    /// Discard the first line unconditionally (default: true)
    #[serde(default = "default_skip_header")]
    pub skip_header: bool,
}

fn default_skip_header() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            locale: LocaleFormat::default(),
            skip_header: default_skip_header(),
        }
    }
}

impl ChatConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for the given locale.
    pub fn for_locale(locale: LocaleFormat) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Creates a configuration from a locale name (`EU`, `NA` or `JP`).
    pub fn from_locale_name(name: &str) -> Result<Self> {
        Ok(Self::for_locale(LocaleFormat::from_str(name)?))
    }

    /// Sets the stamp locale.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleFormat) -> Self {
        self.locale = locale;
        self
    }

    /// Sets whether the first line is discarded.
    #[must_use]
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }
}
