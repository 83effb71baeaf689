//! Conversion tables: per-script syllable data plus the positional rules
//! that pick which variant to emit for a digit.
//!
//! A table answers four questions for the transducer: is the whole number a
//! special case, and for one decimal place, what are the digit, sub-unit
//! (じゅう/ひゃく/せん) and super-unit (まん/おく/…) fragments.

mod kana;
mod kanji;
pub mod rules;

pub use kana::{HIRAGANA, KATAKANA};
pub use kanji::KANJI;
pub use rules::{Emit, Rule, RuleSet, Slot, Variant};

use serde::Serialize;

/// One decimal place of the number being read.
///
/// `sub_unit` is the place inside a 4-digit group (0 = ones .. 3 = thousands),
/// `super_unit` the index of the group itself (0 = lowest group, 1 = まん, …).
/// `quartet` is the value of the whole group the digit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub digit: u8,
    pub sub_unit: usize,
    pub super_unit: usize,
    pub quartet: u16,
}

impl Position {
    pub fn new(digit: u8, sub_unit: usize, super_unit: usize, quartet: u16) -> Self {
        assert!(digit <= 9, "digit out of range: {digit}");
        assert!(sub_unit <= 3, "sub-unit index out of range: {sub_unit}");
        Self {
            digit,
            sub_unit,
            super_unit,
            quartet,
        }
    }
}

/// Lookup capability the transducer is written against.
///
/// All methods are total over valid positions. Out-of-range positions are a
/// caller bug and panic.
pub trait ConversionTable: Send + Sync {
    /// Whole-number override, checked before positional decomposition.
    fn special_format(&self, value: u128) -> Option<&str>;

    fn digit(&self, pos: &Position) -> &str;

    fn sub_unit(&self, pos: &Position) -> &str;

    fn super_unit(&self, pos: &Position) -> &str;
}

/// Data-driven table: syllable arrays plus an ordered [`RuleSet`].
#[derive(Debug)]
pub struct UnitTable {
    pub name: &'static str,
    pub zero: &'static str,
    pub digits: [&'static str; 10],
    pub sub_units: [&'static str; 4],
    /// `super_units[0]` names the second group (10^4).
    pub super_units: &'static [&'static str],
    pub variants: [&'static str; Variant::COUNT],
    pub rules: &'static RuleSet,
}

impl UnitTable {
    fn variant(&self, v: Variant) -> &'static str {
        self.variants[v as usize]
    }

    fn resolve(&self, emit: Option<Emit>, plain: impl FnOnce() -> &'static str) -> &'static str {
        match emit {
            Some(Emit::Silent) => "",
            Some(Emit::Variant(v)) => self.variant(v),
            None => plain(),
        }
    }

    /// Largest super-unit index this table can name.
    pub fn max_super_unit(&self) -> usize {
        self.super_units.len()
    }
}

impl ConversionTable for UnitTable {
    fn special_format(&self, value: u128) -> Option<&str> {
        (value == 0).then_some(self.zero)
    }

    fn digit(&self, pos: &Position) -> &str {
        let emit = rules::first_match(self.rules.digit, pos);
        self.resolve(emit, || self.digits[pos.digit as usize])
    }

    fn sub_unit(&self, pos: &Position) -> &str {
        let emit = rules::first_match(self.rules.sub_unit, pos);
        self.resolve(emit, || self.sub_units[pos.sub_unit])
    }

    fn super_unit(&self, pos: &Position) -> &str {
        let emit = rules::first_match(self.rules.super_unit, pos);
        self.resolve(emit, || {
            assert!(
                pos.super_unit >= 1 && pos.super_unit <= self.max_super_unit(),
                "{}: super-unit index {} has no group word",
                self.name,
                pos.super_unit
            );
            self.super_units[pos.super_unit - 1]
        })
    }
}
