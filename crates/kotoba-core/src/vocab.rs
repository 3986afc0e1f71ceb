//! Vocabulary records as authored in the per-unit content files.

use serde::{Deserialize, Serialize};

/// Separators that start an alternate or an aside in a reading field.
const READING_SEPARATORS: &[char] = &['/', '／', '(', '（'];

/// One vocabulary or grammar item.
///
/// `hiragana` and `romaji` may carry alternates (`はし / ばし`) or asides
/// (`ひと (person)`); only the first segment is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VocabularyEntry {
    pub unit: u32,
    pub category: String,
    pub sub_category: String,
    pub japanese: String,
    pub hiragana: String,
    pub romaji: String,
    pub english: String,
}

impl VocabularyEntry {
    /// Canonical kana reading: text before the first separator or whitespace.
    pub fn canonical_reading(&self) -> &str {
        first_word(&self.hiragana)
    }

    /// Canonical written form, cut the same way as the reading.
    pub fn canonical_japanese(&self) -> &str {
        first_word(&self.japanese)
    }

    /// Canonical romanization. Inner spaces are kept (`ohayou gozaimasu`).
    pub fn canonical_romaji(&self) -> &str {
        first_segment(&self.romaji)
    }
}

/// Text before the first separator, trimmed.
pub fn first_segment(s: &str) -> &str {
    let end = s.find(READING_SEPARATORS).unwrap_or(s.len());
    s[..end].trim()
}

/// Text before the first separator or whitespace. A field that starts with
/// whitespace therefore has an empty first word.
pub fn first_word(s: &str) -> &str {
    let end = s
        .find(|c: char| READING_SEPARATORS.contains(&c) || c.is_whitespace())
        .unwrap_or(s.len());
    s[..end].trim()
}
