//! Range driver: one line per integer of an inclusive range, where values
//! that are multiples of 3 or contain the digit 3 are read aloud and the
//! rest are written as decimals.

use std::ops::RangeInclusive;

use tracing::{debug, debug_span};

use crate::table::ConversionTable;
use crate::transducer;
use crate::unicode::to_fullwidth_digits;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("start must be greater than or equal to 0, got {0}")]
    NegativeStart(i64),
    #[error("end ({end}) must be greater than or equal to start ({start})")]
    EndBeforeStart { start: i64, end: i64 },
    #[error("range of {len} values exceeds the limit of {limit}")]
    TooLong { len: u64, limit: u64 },
}

/// Check caller-supplied bounds and return them as an unsigned range.
pub fn validate_range(
    start: i64,
    end: i64,
    max_len: u64,
) -> Result<RangeInclusive<u64>, RangeError> {
    if start < 0 {
        return Err(RangeError::NegativeStart(start));
    }
    if end < start {
        return Err(RangeError::EndBeforeStart { start, end });
    }
    let (start, end) = (start as u64, end as u64);
    let len = end - start + 1;
    if len > max_len {
        return Err(RangeError::TooLong { len, limit: max_len });
    }
    Ok(start..=end)
}

/// When a value is read aloud instead of written as digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NabeatsuRule {
    pub divisor: u64,
    pub digit: u8,
}

impl Default for NabeatsuRule {
    fn default() -> Self {
        Self {
            divisor: 3,
            digit: 3,
        }
    }
}

impl NabeatsuRule {
    pub fn applies(&self, value: u64) -> bool {
        if self.divisor != 0 && value % self.divisor == 0 {
            return true;
        }
        let mut rest = value;
        while rest > 0 {
            if rest % 10 == u64::from(self.digit) {
                return true;
            }
            rest /= 10;
        }
        false
    }
}

/// Reading or decimal text for one value.
pub fn render<T: ConversionTable + ?Sized>(
    value: u64,
    rule: &NabeatsuRule,
    table: &T,
    fullwidth: bool,
) -> String {
    if rule.applies(value) {
        return transducer::format(u128::from(value), table);
    }
    let decimal = value.to_string();
    if fullwidth {
        to_fullwidth_digits(&decimal)
    } else {
        decimal
    }
}

pub fn generate<T: ConversionTable + ?Sized>(
    range: RangeInclusive<u64>,
    rule: &NabeatsuRule,
    table: &T,
    fullwidth: bool,
) -> Vec<String> {
    let _span = debug_span!("generate", start = *range.start(), end = *range.end()).entered();
    let lines: Vec<String> = range.map(|v| render(v, rule, table, fullwidth)).collect();
    debug!(line_count = lines.len());
    lines
}
