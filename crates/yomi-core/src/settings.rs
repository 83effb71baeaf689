//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::format::Script;
use crate::nabeatsu::NabeatsuRule;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub format: FormatSettings,
    pub nabeatsu: NabeatsuSettings,
    pub range: RangeSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    pub fn nabeatsu_rule(&self) -> NabeatsuRule {
        NabeatsuRule {
            divisor: self.nabeatsu.divisor,
            digit: self.nabeatsu.digit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatSettings {
    pub script: Script,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NabeatsuSettings {
    pub divisor: u64,
    pub digit: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RangeSettings {
    pub max_len: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub fullwidth_digits: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(nabeatsu.divisor);
    check_positive!(range.max_len);

    if s.nabeatsu.digit > 9 {
        return Err(SettingsError::InvalidValue {
            field: "nabeatsu.digit".to_string(),
            reason: "must be a single decimal digit".to_string(),
        });
    }

    Ok(())
}
