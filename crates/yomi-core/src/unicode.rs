//! Character-level helpers for kana and digit output.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Non-empty and made of hiragana only.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana)
}

/// Map ASCII digits to their full-width forms (0 → ０). Other characters are
/// passed through.
pub fn to_fullwidth_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                char::from_u32(c as u32 - '0' as u32 + '０' as u32).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{HIRAGANA, KANJI, KATAKANA};

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("いっせんまんに"));
        assert!(is_hiragana_reading("ぜろ"));
        assert!(!is_hiragana_reading("ゼロ"));
        assert!(!is_hiragana_reading("123"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("ろっぴゃく"), "ロッピャク");
        assert_eq!(hiragana_to_katakana("ちょう"), "チョウ");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("12"), "12");
        assert_eq!(hiragana_to_katakana("マン"), "マン");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('ぜ'));
        assert!(!is_hiragana('ゼ'));
        assert!(is_katakana('ッ'));
        assert!(!is_katakana('っ'));
        assert!(is_kanji('億'));
        assert!(!is_kanji('お'));
    }

    #[test]
    fn test_fullwidth_digits() {
        assert_eq!(to_fullwidth_digits("0"), "０");
        assert_eq!(to_fullwidth_digits("1024"), "１０２４");
        assert_eq!(to_fullwidth_digits("さん"), "さん");
    }

    #[test]
    fn test_katakana_table_mirrors_hiragana() {
        assert_eq!(KATAKANA.zero, hiragana_to_katakana(HIRAGANA.zero));
        for (h, k) in HIRAGANA.digits.iter().zip(KATAKANA.digits.iter()) {
            assert_eq!(*k, hiragana_to_katakana(h));
        }
        for (h, k) in HIRAGANA.sub_units.iter().zip(KATAKANA.sub_units.iter()) {
            assert_eq!(*k, hiragana_to_katakana(h));
        }
        assert_eq!(HIRAGANA.super_units.len(), KATAKANA.super_units.len());
        for (h, k) in HIRAGANA.super_units.iter().zip(KATAKANA.super_units.iter()) {
            assert_eq!(*k, hiragana_to_katakana(h));
        }
        for (h, k) in HIRAGANA.variants.iter().zip(KATAKANA.variants.iter()) {
            assert_eq!(*k, hiragana_to_katakana(h));
        }
    }

    #[test]
    fn test_table_scripts() {
        let all_hiragana = HIRAGANA.digits.iter().chain(HIRAGANA.super_units);
        assert!(all_hiragana.copied().all(is_hiragana_reading));
        let kanji = KANJI.digits.iter().chain(KANJI.super_units);
        assert!(kanji.flat_map(|s| s.chars()).all(is_kanji));
        assert!(KATAKANA.variants.iter().flat_map(|s| s.chars()).all(is_katakana));
    }
}
