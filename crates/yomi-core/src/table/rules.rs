//! Ordered override rules.
//!
//! Each rule is a pattern over the four fields of a [`Position`] and the
//! fragment to emit when it matches. Lists are scanned top to bottom and the
//! first matching rule wins; when nothing matches the table's plain entry is
//! used.

use super::Position;

/// Pattern for a single position field.
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    Any,
    Is(usize),
    Not(usize),
    OneOf(&'static [usize]),
}

impl Slot {
    pub fn matches(&self, value: usize) -> bool {
        match *self {
            Slot::Any => true,
            Slot::Is(v) => value == v,
            Slot::Not(v) => value != v,
            Slot::OneOf(set) => set.contains(&value),
        }
    }
}

/// Euphonic variants a table may substitute for a plain entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// いっ
    GeminatedOne = 0,
    /// ろっ
    GeminatedSix,
    /// はっ
    GeminatedEight,
    /// びゃく
    VoicedHundred,
    /// ぴゃく
    SemiVoicedHundred,
    /// ぜん
    VoicedThousand,
}

impl Variant {
    pub const COUNT: usize = 6;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Silent,
    Variant(Variant),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub digit: Slot,
    pub sub_unit: Slot,
    pub super_unit: Slot,
    pub quartet: Slot,
    pub emit: Emit,
}

impl Rule {
    pub const fn new(digit: Slot, sub_unit: Slot, super_unit: Slot, emit: Emit) -> Self {
        Self {
            digit,
            sub_unit,
            super_unit,
            quartet: Slot::Any,
            emit,
        }
    }

    /// Rule that only looks at the value of the enclosing group.
    pub const fn quartet(quartet: Slot, emit: Emit) -> Self {
        Self {
            digit: Slot::Any,
            sub_unit: Slot::Any,
            super_unit: Slot::Any,
            quartet,
            emit,
        }
    }

    pub fn matches(&self, pos: &Position) -> bool {
        self.digit.matches(pos.digit as usize)
            && self.sub_unit.matches(pos.sub_unit)
            && self.super_unit.matches(pos.super_unit)
            && self.quartet.matches(pos.quartet as usize)
    }
}

/// The three rule lists a [`super::UnitTable`] consults.
#[derive(Debug)]
pub struct RuleSet {
    pub digit: &'static [Rule],
    pub sub_unit: &'static [Rule],
    pub super_unit: &'static [Rule],
}

pub(crate) fn first_match(rules: &[Rule], pos: &Position) -> Option<Emit> {
    rules.iter().find(|r| r.matches(pos)).map(|r| r.emit)
}

use Emit::{Silent, Variant as V};
use Slot::{Any, Is, Not, OneOf};

/// Group indices (ちょう, けい, こう, かん, せい) whose word starts with a
/// consonant that geminates a preceding いち/はち.
const GEMINATING_GROUPS: &[usize] = &[3, 4, 8, 9, 10];

/// Reading rules shared by the hiragana and katakana tables.
pub static KANA: RuleSet = RuleSet {
    digit: &[
        Rule::new(Is(0), Any, Any, Silent),
        // じゅう, ひゃく, せん: no leading いち in the lowest group
        Rule::new(Is(1), Not(0), Is(0), Silent),
        Rule::new(Is(6), Is(2), Any, V(Variant::GeminatedSix)),
        Rule::new(Is(8), Is(2), Any, V(Variant::GeminatedEight)),
        Rule::new(Is(1), Is(3), OneOf(&[1, 2]), V(Variant::GeminatedOne)),
        Rule::new(Is(1), Is(0), OneOf(GEMINATING_GROUPS), V(Variant::GeminatedOne)),
        Rule::new(Is(8), Is(3), Any, V(Variant::GeminatedEight)),
        Rule::new(Is(8), Is(0), OneOf(GEMINATING_GROUPS), V(Variant::GeminatedEight)),
    ],
    sub_unit: &[
        Rule::new(Is(0), Any, Any, Silent),
        Rule::new(Any, Is(0), Any, Silent),
        Rule::new(Is(3), Is(2), Any, V(Variant::VoicedHundred)),
        Rule::new(OneOf(&[6, 8]), Is(2), Any, V(Variant::SemiVoicedHundred)),
        Rule::new(Is(3), Is(3), Any, V(Variant::VoicedThousand)),
    ],
    super_unit: GROUP_WORD,
};

/// Kanji numerals have no euphonic changes; 一 before 十/百/千 is dropped in
/// every group (十万, 千万).
pub static KANJI: RuleSet = RuleSet {
    digit: &[
        Rule::new(Is(0), Any, Any, Silent),
        Rule::new(Is(1), Not(0), Any, Silent),
    ],
    sub_unit: &[
        Rule::new(Is(0), Any, Any, Silent),
        Rule::new(Any, Is(0), Any, Silent),
    ],
    super_unit: GROUP_WORD,
};

/// The group word is read once, at the ones place of a non-empty group
/// above the lowest one.
const GROUP_WORD: &[Rule] = &[
    Rule::new(Any, Not(0), Any, Silent),
    Rule::new(Any, Any, Is(0), Silent),
    Rule::quartet(Is(0), Silent),
];
