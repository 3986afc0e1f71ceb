use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{hiragana_to_katakana, is_hiragana, is_katakana, CHOONPU, SOKUON};

#[derive(Deserialize)]
struct KanaConfig {
    mappings: BTreeMap<String, String>,
    #[serde(default)]
    katakana: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key is not {script}: {key}")]
    WrongScript { key: String, script: &'static str },
    #[error("key must be one or two kana: {0}")]
    KeyLength(String),
    #[error("key contains a mark handled by the transducer: {0}")]
    ReservedMark(String),
    #[error("value for key {0} must be non-empty lowercase ASCII")]
    InvalidValue(String),
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
///
/// Every `[mappings]` entry is returned together with its katakana
/// counterpart; `[katakana]` entries are added as-is and win over derived
/// ones on collision.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KanaConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(KanaConfigError::Empty);
    }

    let mut table = BTreeMap::new();
    for (key, value) in &config.mappings {
        validate_entry(key, value, is_hiragana, "hiragana")?;
        table.insert(key.clone(), value.clone());
        table.insert(hiragana_to_katakana(key), value.clone());
    }
    for (key, value) in &config.katakana {
        validate_entry(key, value, is_katakana, "katakana")?;
        table.insert(key.clone(), value.clone());
    }

    Ok(table)
}

fn validate_entry(
    key: &str,
    value: &str,
    in_script: fn(char) -> bool,
    script: &'static str,
) -> Result<(), KanaConfigError> {
    let len = key.chars().count();
    if len == 0 || len > 2 {
        return Err(KanaConfigError::KeyLength(key.to_string()));
    }
    if key.chars().any(|c| SOKUON.contains(&c) || c == CHOONPU) {
        return Err(KanaConfigError::ReservedMark(key.to_string()));
    }
    if !key.chars().all(in_script) {
        return Err(KanaConfigError::WrongScript {
            key: key.to_string(),
            script,
        });
    }
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(KanaConfigError::InvalidValue(key.to_string()));
    }
    Ok(())
}
