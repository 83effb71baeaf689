//! Number → reading transducer.
//!
//! Splits a value into decimal digits, walks them most-significant first
//! while tracking the place inside the current 4-digit group (`sub_unit`,
//! 3→0) and the group index (`super_unit`, decreasing), and concatenates the
//! digit, sub-unit and super-unit fragments the table returns for each place.

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::table::{ConversionTable, Position};

/// `u128::MAX` has 39 decimal digits.
const MAX_DIGITS: usize = 39;

/// Fragments emitted for one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step<'a> {
    pub position: Position,
    pub digit: &'a str,
    pub sub_unit: &'a str,
    pub super_unit: &'a str,
}

impl Step<'_> {
    pub fn text_len(&self) -> usize {
        self.digit.len() + self.sub_unit.len() + self.super_unit.len()
    }
}

/// Read `value` aloud using `table`.
pub fn format<T: ConversionTable + ?Sized>(value: u128, table: &T) -> String {
    let _span = debug_span!("format", value = %value).entered();

    if let Some(special) = table.special_format(value) {
        debug!(special, "whole-number override");
        return special.to_string();
    }

    let steps = steps(value, table);
    let mut out = String::with_capacity(steps.iter().map(Step::text_len).sum());
    for step in &steps {
        out.push_str(step.digit);
        out.push_str(step.sub_unit);
        out.push_str(step.super_unit);
    }
    debug!(digits = steps.len(), bytes = out.len());
    out
}

/// Per-place breakdown of the positional reading.
///
/// Does not consult [`ConversionTable::special_format`]; for zero this yields
/// the single ones-place step.
pub fn steps<T: ConversionTable + ?Sized>(value: u128, table: &T) -> Vec<Step<'_>> {
    positions(value)
        .map(|position| Step {
            position,
            digit: table.digit(&position),
            sub_unit: table.sub_unit(&position),
            super_unit: table.super_unit(&position),
        })
        .collect()
}

/// Iterate the places of `value`, most significant first.
pub fn positions(value: u128) -> Positions {
    let digits = decimal_digits(value);
    let quartets = quartets(value);
    let last = digits.len() - 1;
    Positions {
        digits,
        quartets,
        next: 0,
        sub_unit: last % 4,
        super_unit: last / 4,
    }
}

/// Cursor over the places of one value.
#[derive(Debug, Clone)]
pub struct Positions {
    digits: Vec<u8>,
    /// Group values, lowest group first.
    quartets: Vec<u16>,
    next: usize,
    sub_unit: usize,
    super_unit: usize,
}

impl Positions {
    fn advance(&mut self) {
        if self.sub_unit == 0 {
            self.sub_unit = 3;
            self.super_unit -= 1;
        } else {
            self.sub_unit -= 1;
        }
    }
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let digit = *self.digits.get(self.next)?;
        let pos = Position::new(
            digit,
            self.sub_unit,
            self.super_unit,
            self.quartets[self.super_unit],
        );
        self.next += 1;
        if self.next < self.digits.len() {
            self.advance();
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.digits.len() - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions {}

/// Decimal digits, most significant first. Zero yields `[0]`.
fn decimal_digits(mut value: u128) -> Vec<u8> {
    let mut digits = Vec::with_capacity(MAX_DIGITS);
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

fn quartets(mut value: u128) -> Vec<u16> {
    let mut groups = Vec::with_capacity(MAX_DIGITS.div_ceil(4));
    loop {
        groups.push((value % 10_000) as u16);
        value /= 10_000;
        if value == 0 {
            break;
        }
    }
    groups
}

/// Lazily formatted reading, for use with `format!`/`write!`.
pub struct Reading<'a, T: ?Sized> {
    value: u128,
    table: &'a T,
}

impl<'a, T: ConversionTable + ?Sized> Reading<'a, T> {
    pub fn new(value: u128, table: &'a T) -> Self {
        Self { value, table }
    }
}

impl<T: ConversionTable + ?Sized> fmt::Display for Reading<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(special) = self.table.special_format(self.value) {
            return f.write_str(special);
        }
        for step in steps(self.value, self.table) {
            f.write_str(step.digit)?;
            f.write_str(step.sub_unit)?;
            f.write_str(step.super_unit)?;
        }
        Ok(())
    }
}
