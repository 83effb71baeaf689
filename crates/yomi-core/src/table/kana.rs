use super::rules;
use super::UnitTable;

pub static HIRAGANA: UnitTable = UnitTable {
    name: "hiragana",
    zero: "ぜろ",
    digits: [
        "ぜろ", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
    ],
    sub_units: ["", "じゅう", "ひゃく", "せん"],
    super_units: &[
        "まん", "おく", "ちょう", "けい", "がい", "じょ", "じょう", "こう", "かん", "せい", "さい",
        "ごく",
    ],
    variants: ["いっ", "ろっ", "はっ", "びゃく", "ぴゃく", "ぜん"],
    rules: &rules::KANA,
};

pub static KATAKANA: UnitTable = UnitTable {
    name: "katakana",
    zero: "ゼロ",
    digits: [
        "ゼロ", "イチ", "ニ", "サン", "ヨン", "ゴ", "ロク", "ナナ", "ハチ", "キュウ",
    ],
    sub_units: ["", "ジュウ", "ヒャク", "セン"],
    super_units: &[
        "マン", "オク", "チョウ", "ケイ", "ガイ", "ジョ", "ジョウ", "コウ", "カン", "セイ", "サイ",
        "ゴク",
    ],
    variants: ["イッ", "ロッ", "ハッ", "ビャク", "ピャク", "ゼン"],
    rules: &rules::KANA,
};
