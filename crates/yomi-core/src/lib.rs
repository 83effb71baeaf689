//! Japanese numeral readings: いっせんまんに for 10000002.
//!
//! [`transducer::format`] walks a value's decimal places and asks a
//! [`table::ConversionTable`] for the fragment to emit at each one.
//! [`mod@format`] maps format specifiers and untyped arguments onto that call,
//! [`nabeatsu`] drives it over integer ranges.

pub mod format;
pub mod nabeatsu;
pub mod settings;
pub mod table;
pub mod transducer;
pub mod unicode;

pub use format::{FormatError, Script};
pub use table::{ConversionTable, Position, HIRAGANA, KANJI, KATAKANA};
pub use transducer::{format, Reading};
