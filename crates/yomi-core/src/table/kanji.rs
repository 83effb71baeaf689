use super::rules;
use super::UnitTable;

/// 二十一億四千七百四十八万三千六百四十七
pub static KANJI: UnitTable = UnitTable {
    name: "kanji",
    zero: "零",
    digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    sub_units: ["", "十", "百", "千"],
    super_units: &[
        "万", "億", "兆", "京", "垓", "秭", "穣", "溝", "澗", "正", "載", "極",
    ],
    // Never selected by the kanji rules; plain forms keep the table total.
    variants: ["一", "六", "八", "百", "百", "千"],
    rules: &rules::KANJI,
};
