use std::process;

use serde::Serialize;

use yomi_core::format::{parse_argument, FormatError, Script};
use yomi_core::nabeatsu::{self, RangeError};
use yomi_core::settings::settings;
use yomi_core::transducer::{self, Step};
use yomi_core::ConversionTable;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// `--script` if given, else the configured default.
pub fn resolve_script(script: Option<&str>) -> Result<Script, FormatError> {
    match script {
        Some(s) => s.parse(),
        None => Ok(settings().format.script),
    }
}

pub fn read_cmd(value: &str, script: Option<&str>) {
    let script = die!(resolve_script(script), "Error: {}");
    let value = die!(parse_argument(value), "Error: {}");
    println!("{}", script.format(value));
}

/// Lines for `range`: every value read aloud, or only the nabeatsu ones.
pub fn range_lines(
    start: i64,
    end: i64,
    script: Script,
    nabeatsu: bool,
) -> Result<Vec<String>, RangeError> {
    let s = settings();
    let range = nabeatsu::validate_range(start, end, s.range.max_len)?;
    if nabeatsu {
        let rule = s.nabeatsu_rule();
        return Ok(nabeatsu::generate(
            range,
            &rule,
            script.table(),
            s.output.fullwidth_digits,
        ));
    }
    Ok(range.map(|v| script.format(u128::from(v))).collect())
}

pub fn range_cmd(start: i64, end: i64, script: Option<&str>, nabeatsu: bool, json: bool) {
    let script = die!(resolve_script(script), "Error: {}");
    let lines = die!(range_lines(start, end, script, nabeatsu), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&lines), "Error serializing JSON: {}");
        println!("{out}");
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Explanation<'a> {
    pub value: String,
    pub script: Script,
    pub reading: String,
    /// Set when the whole-number override fired; `steps` is then empty.
    pub special: bool,
    pub steps: Vec<Step<'a>>,
}

pub fn explain(value: u128, script: Script) -> Explanation<'static> {
    let table = script.table();
    let special = table.special_format(value).is_some();
    let steps = if special {
        Vec::new()
    } else {
        transducer::steps(value, table)
    };
    Explanation {
        value: value.to_string(),
        script,
        reading: script.format(value),
        special,
        steps,
    }
}

pub fn format_explanation(e: &Explanation<'_>) -> String {
    let mut out = format!("{} [{}] → {}\n", e.value, e.script, e.reading);
    if e.special {
        out.push_str("  (whole-number override)\n");
        return out;
    }
    for step in &e.steps {
        let p = step.position;
        out.push_str(&format!(
            "  d={} sub={} super={:<2} quartet={:>4}  {:<6}|{:<6}|{}\n",
            p.digit,
            p.sub_unit,
            p.super_unit,
            p.quartet,
            step.digit,
            step.sub_unit,
            step.super_unit
        ));
    }
    out
}

pub fn explain_cmd(value: &str, script: Option<&str>, json: bool) {
    let script = die!(resolve_script(script), "Error: {}");
    let value = die!(parse_argument(value), "Error: {}");
    let explanation = explain(value, script);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&explanation),
            "Error serializing JSON: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_explanation(&explanation));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_script() {
        assert_eq!(resolve_script(Some("K")), Ok(Script::Katakana));
        assert_eq!(resolve_script(None), Ok(Script::Hiragana));
        assert!(resolve_script(Some("x")).is_err());
    }

    #[test]
    fn test_range_lines_all_values() {
        let lines = range_lines(9, 11, Script::Hiragana, false).unwrap();
        assert_eq!(lines, vec!["きゅう", "じゅう", "じゅういち"]);
    }

    #[test]
    fn test_range_lines_nabeatsu() {
        let lines = range_lines(29, 31, Script::Katakana, true).unwrap();
        assert_eq!(lines, vec!["29", "サンジュウ", "サンジュウイチ"]);
    }

    #[test]
    fn test_range_lines_rejects_bad_bounds() {
        assert_eq!(
            range_lines(-1, 3, Script::Hiragana, false),
            Err(RangeError::NegativeStart(-1))
        );
        assert!(matches!(
            range_lines(3, 1, Script::Hiragana, true),
            Err(RangeError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_explain_positional() {
        let e = explain(10_000_002, Script::Hiragana);
        assert!(!e.special);
        assert_eq!(e.reading, "いっせんまんに");
        assert_eq!(e.steps.len(), 8);
        assert_eq!(e.steps[0].digit, "いっ");
        assert_eq!(e.steps[3].super_unit, "まん");

        let text = format_explanation(&e);
        assert!(text.starts_with("10000002 [H] → いっせんまんに\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_explain_zero_is_special() {
        let e = explain(0, Script::Kanji);
        assert!(e.special);
        assert!(e.steps.is_empty());
        assert!(format_explanation(&e).contains("whole-number override"));
    }

    #[test]
    fn test_explain_json_shape() {
        let e = explain(36, Script::Hiragana);
        let v: serde_json::Value = serde_json::to_value(&e).unwrap();
        assert_eq!(v["script"], "H");
        assert_eq!(v["reading"], "さんじゅうろく");
        assert_eq!(v["steps"][0]["position"]["sub_unit"], 1);
        assert_eq!(v["steps"][1]["digit"], "ろく");
    }
}
