//! Chat export parsers.
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports in EU, NA or JP layout
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::parsers::WhatsAppParser;
//! use chatstats::parsing::LocaleFormat;
//! use std::path::Path;
//!
//! let parser = WhatsAppParser::for_locale(LocaleFormat::Na);
//! let records = parser.parse(Path::new("chat.txt"))?;
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

mod whatsapp;

pub use whatsapp::WhatsAppParser;
