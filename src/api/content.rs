//! Per-unit JSON content files.
//!
//! Each file holds an array of vocabulary records with PascalCase keys
//! (`Unit`, `Category`, `SubCategory`, `Japanese`, `Hiragana`, `Romaji`,
//! `English`). Records are returned in file order; no deduplication.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, debug_span};

use kotoba_core::vocab::VocabularyEntry;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid content in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no *.json content files found in {}", .0.display())]
    NoFiles(PathBuf),
}

/// Parse one unit file's JSON text.
pub fn parse_unit_json(json: &str) -> Result<Vec<VocabularyEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn load_unit_file(path: &Path) -> Result<Vec<VocabularyEntry>, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_unit_json(&text).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` file in `dir`, in file-name order.
pub fn load_content_dir(dir: &Path) -> Result<Vec<VocabularyEntry>, ContentError> {
    let _span = debug_span!("load_content_dir", dir = %dir.display()).entered();
    let io_err = |source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ContentError::NoFiles(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for file in &files {
        let unit = load_unit_file(file)?;
        debug!(file = %file.display(), entries = unit.len());
        entries.extend(unit);
    }
    Ok(entries)
}

/// Keep entries from the given units (all units when empty) and, when set,
/// one category (case-insensitive).
pub fn filter_entries(
    entries: &[VocabularyEntry],
    units: &[u32],
    category: Option<&str>,
) -> Vec<VocabularyEntry> {
    entries
        .iter()
        .filter(|e| units.is_empty() || units.contains(&e.unit))
        .filter(|e| category.map_or(true, |want| want.eq_ignore_ascii_case(&e.category)))
        .cloned()
        .collect()
}
