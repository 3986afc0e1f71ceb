//! Facade used by the game modes and the CLI.
//!
//! Content loading, the swappable `StudyEngine`, sentence views, and
//! process-wide configuration entry points.

pub mod content;
mod engine;
mod types;

pub use content::{filter_entries, load_content_dir, load_unit_file, parse_unit_json, ContentError};
pub use engine::{ContentSnapshot, StudyEngine};
pub use types::{KotobaError, SentenceView, TokenView};

use std::path::Path;

use kotoba_core::romaji::KanaTable;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn read_config(path: &str) -> Result<String, KotobaError> {
    std::fs::read_to_string(path).map_err(|e| KotobaError::Io {
        msg: format!("{path}: {e}"),
    })
}

/// Install a custom kana table. Must run before the first romanization.
pub fn kana_load_config(path: &str) -> Result<(), KotobaError> {
    let content = read_config(path)?;
    KanaTable::init_custom(content).map_err(|e| KotobaError::InvalidData { msg: e.to_string() })
}

/// Install a custom grammar lexicon. Must run before the first dictionary build.
pub fn settings_load_config(path: &str) -> Result<(), KotobaError> {
    let content = read_config(path)?;
    kotoba_core::settings::init_custom(content)
        .map_err(|e| KotobaError::InvalidData { msg: e.to_string() })
}

pub fn kana_default_config() -> String {
    kotoba_core::romaji::default_toml().to_string()
}

pub fn settings_default_config() -> String {
    kotoba_core::settings::default_toml().to_string()
}

/// Load every content file in `dir` into a new engine.
pub fn open_content_dir(dir: &Path) -> Result<StudyEngine, KotobaError> {
    let entries = load_content_dir(dir).map_err(KotobaError::from)?;
    Ok(StudyEngine::new(entries))
}

pub fn trace_init(log_dir: &str) {
    crate::trace_init::init_tracing(Path::new(log_dir));
}

impl From<ContentError> for KotobaError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::Io { .. } | ContentError::NoFiles(_) => KotobaError::Io {
                msg: e.to_string(),
            },
            ContentError::Json { .. } => KotobaError::InvalidData { msg: e.to_string() },
        }
    }
}
