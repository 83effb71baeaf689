//! Property-based checks over the whole i32 range.

use proptest::prelude::*;

use super::super::*;
use crate::table::{HIRAGANA, KATAKANA};
use crate::unicode::{hiragana_to_katakana, is_hiragana_reading};

fn arb_i32_value() -> impl Strategy<Value = u128> {
    (0u32..=i32::MAX as u32).prop_map(u128::from)
}

proptest! {
    #[test]
    fn deterministic_hiragana(value in arb_i32_value()) {
        let first = format(value, &HIRAGANA);
        prop_assert_eq!(&first, &format(value, &HIRAGANA));
        prop_assert!(is_hiragana_reading(&first), "{} -> {:?}", value, first);
    }

    #[test]
    fn katakana_mirrors_hiragana(value in arb_i32_value()) {
        prop_assert_eq!(
            format(value, &KATAKANA),
            hiragana_to_katakana(&format(value, &HIRAGANA))
        );
    }

    #[test]
    fn one_step_per_digit(value in arb_i32_value()) {
        prop_assert_eq!(steps(value, &HIRAGANA).len(), value.to_string().len());
    }

    #[test]
    fn zero_digits_are_silent(value in arb_i32_value()) {
        for step in steps(value, &HIRAGANA) {
            let p = step.position;
            if p.digit == 0 {
                prop_assert_eq!(step.digit, "");
                prop_assert_eq!(step.sub_unit, "");
            }
            let carries_group_word = p.sub_unit == 0 && p.super_unit > 0 && p.quartet != 0;
            prop_assert_eq!(!step.super_unit.is_empty(), carries_group_word, "{:?}", p);
        }
    }

    #[test]
    fn hundreds_six_and_eight_geminate(
        upper in 0u128..=2_147_482,
        digit in prop::sample::select(vec![6u128, 8]),
        tail in 0u128..100,
    ) {
        let value = upper * 1000 + digit * 100 + tail;
        let text = format(value, &HIRAGANA);
        let expected = if digit == 6 { "ろっぴゃく" } else { "はっぴゃく" };
        prop_assert!(text.contains(expected), "{} -> {}", value, text);
        for plain in ["ろくひゃく", "ろくぴゃく", "はちひゃく", "はちぴゃく"] {
            prop_assert!(!text.contains(plain), "{} -> {}", value, text);
        }
    }

    #[test]
    fn empty_man_group_has_no_group_word(oku in 1u128..=21, low in 0u128..10_000) {
        let value = oku * 100_000_000 + low;
        let text = format(value, &HIRAGANA);
        prop_assert!(text.contains("おく"));
        prop_assert!(!text.contains("まん"), "{} -> {}", value, text);
    }

    #[test]
    fn every_u128_is_readable(value in any::<u128>()) {
        prop_assert!(!format(value, &HIRAGANA).is_empty());
    }
}
