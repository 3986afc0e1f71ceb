//! Grammar lexicon loaded from TOML, following the same OnceLock pattern as
//! the kana table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::tokenizer::BLANK_MARKER;

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
pub struct Settings {
    pub tokenizer: TokenizerSettings,
    pub romanizer: RomanizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    /// Set phrases that always segment as one word.
    pub exceptions: Vec<String>,
    pub particles: Vec<String>,
    /// Verb/politeness endings and punctuation.
    pub endings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanizerSettings {
    /// Romanizations for endings, consulted after authored content.
    #[serde(default)]
    pub endings: BTreeMap<String, String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let lists = [
        ("tokenizer.exceptions", &s.tokenizer.exceptions),
        ("tokenizer.particles", &s.tokenizer.particles),
        ("tokenizer.endings", &s.tokenizer.endings),
    ];
    for (field, list) in lists {
        for word in list {
            check_word(field, word)?;
        }
    }
    for (key, romaji) in &s.romanizer.endings {
        check_word("romanizer.endings", key)?;
        if romaji.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("romanizer.endings.{key}"),
                reason: "romanization must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn check_word(field: &str, word: &str) -> Result<(), SettingsError> {
    let reason = if word.is_empty() {
        "entries must not be empty"
    } else if word.chars().any(char::is_whitespace) {
        "entries must not contain whitespace"
    } else if word == BLANK_MARKER {
        "entries must not equal the blank marker"
    } else {
        return Ok(());
    };
    Err(SettingsError::InvalidValue {
        field: field.to_string(),
        reason: format!("{reason} ({word:?})"),
    })
}
