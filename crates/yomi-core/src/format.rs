//! Entry points for callers holding a format specifier and an untyped
//! argument: specifier → table selection and argument validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::table::{UnitTable, HIRAGANA, KANJI, KATAKANA};
use crate::transducer;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown format specifier: {0:?}")]
    UnknownSpecifier(String),
    #[error("negative values have no reading: {0}")]
    Negative(String),
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("value out of range: {0}")]
    OutOfRange(String),
}

/// Output script, selected by a format specifier such as `H` in `{0:H}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Script {
    Hiragana,
    Katakana,
    Kanji,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Hiragana, Script::Katakana, Script::Kanji];

    /// Single-letter specifier.
    pub fn key(self) -> &'static str {
        match self {
            Script::Hiragana => "H",
            Script::Katakana => "K",
            Script::Kanji => "J",
        }
    }

    pub fn table(self) -> &'static UnitTable {
        match self {
            Script::Hiragana => &HIRAGANA,
            Script::Katakana => &KATAKANA,
            Script::Kanji => &KANJI,
        }
    }

    pub fn format(self, value: u128) -> String {
        transducer::format(value, self.table())
    }
}

impl FromStr for Script {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => return Ok(Script::Hiragana),
            "K" => return Ok(Script::Katakana),
            "J" => return Ok(Script::Kanji),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "hiragana" => Ok(Script::Hiragana),
            "katakana" => Ok(Script::Katakana),
            "kanji" => Ok(Script::Kanji),
            _ => Err(FormatError::UnknownSpecifier(s.to_string())),
        }
    }
}

impl TryFrom<String> for Script {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Script> for String {
    fn from(s: Script) -> String {
        s.key().to_string()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read an integer of any primitive width under `specifier`.
///
/// ```
/// use yomi_core::format::format_value;
/// assert_eq!(format_value("H", 10_002).unwrap(), "いちまんに");
/// assert!(format_value("H", -1).is_err());
/// ```
pub fn format_value<V>(specifier: &str, value: V) -> Result<String, FormatError>
where
    V: TryInto<u128> + fmt::Display + Copy,
{
    let script: Script = specifier.parse()?;
    let value = value
        .try_into()
        .map_err(|_| FormatError::Negative(value.to_string()))?;
    Ok(script.format(value))
}

/// Validate a textual argument. Accepts an optional leading `+` and ASCII
/// digits only.
pub fn parse_argument(text: &str) -> Result<u128, FormatError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if let Some(magnitude) = unsigned.strip_prefix('-') {
        if is_digits(magnitude) && magnitude.bytes().any(|b| b != b'0') {
            return Err(FormatError::Negative(trimmed.to_string()));
        }
        // "-0" reads as zero
        if is_digits(magnitude) {
            return Ok(0);
        }
        return Err(FormatError::NotAnInteger(text.to_string()));
    }
    if !is_digits(unsigned) {
        return Err(FormatError::NotAnInteger(text.to_string()));
    }
    unsigned
        .parse()
        .map_err(|_| FormatError::OutOfRange(trimmed.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// [`parse_argument`] followed by formatting.
pub fn format_argument(specifier: &str, text: &str) -> Result<String, FormatError> {
    let script: Script = specifier.parse()?;
    let value = parse_argument(text)?;
    Ok(script.format(value))
}
