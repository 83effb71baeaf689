use std::fs;
use std::path::Path;
use std::process;

use yomi_core::settings::{self, Settings};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

/// Parse and validate a settings file without installing it.
pub fn check_settings_file(path: &Path) -> Result<Settings, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    settings::parse_settings_toml(&content).map_err(|e| e.to_string())
}

pub fn settings_summary(s: &Settings) -> String {
    format!(
        "OK: format.script={}, nabeatsu.divisor={}, nabeatsu.digit={}, range.max_len={}",
        s.format.script, s.nabeatsu.divisor, s.nabeatsu.digit, s.range.max_len
    )
}

pub fn settings_validate(file: &str) {
    let s = die!(check_settings_file(Path::new(file)), "Error: {}");
    println!("{}", settings_summary(&s));
}

/// Install a custom settings file for the rest of the process.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading settings: {}");
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_check_default_settings_file() {
        let f = write_temp(settings::default_toml());
        let s = check_settings_file(f.path()).unwrap();
        assert_eq!(
            settings_summary(&s),
            "OK: format.script=H, nabeatsu.divisor=3, nabeatsu.digit=3, range.max_len=100000"
        );
    }

    #[test]
    fn test_check_invalid_settings_file() {
        let f = write_temp("[format]\nscript = \"H\"\n");
        let err = check_settings_file(f.path()).unwrap_err();
        assert!(err.contains("TOML parse error"), "{err}");
    }

    #[test]
    fn test_check_missing_file() {
        let err = check_settings_file(Path::new("/nonexistent/yomi.toml")).unwrap_err();
        assert!(err.starts_with("reading /nonexistent/yomi.toml"), "{err}");
    }
}
