//! Shared parsing building blocks.
//!
//! [`locale`] holds the per-locale stamp layouts and the compiled matcher the
//! transcript parser is built on.

pub mod locale;

pub use locale::{LocaleFormat, StampFormat};
