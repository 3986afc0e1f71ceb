use std::collections::HashMap;

use tracing::{debug, debug_span};

use super::transduce::transliterate;
use crate::settings::{settings, Settings};
use crate::tokenizer::Token;
use crate::vocab::VocabularyEntry;

/// Topic particle は and its pronunciation.
pub const TOPIC_PARTICLE: (&str, &str) = ("は", "wa");
/// Direction particle へ and its pronunciation.
pub const DIRECTION_PARTICLE: (&str, &str) = ("へ", "e");

/// Authored romanizations keyed by reading and by written form.
pub struct RomajiDictionary {
    entries: HashMap<String, String>,
}

impl RomajiDictionary {
    pub fn build(vocabulary: &[VocabularyEntry]) -> Self {
        Self::build_with(vocabulary, settings())
    }

    /// The first entry to claim a key keeps it. Lexicon endings only fill
    /// keys no vocabulary entry claimed.
    pub fn build_with(vocabulary: &[VocabularyEntry], settings: &Settings) -> Self {
        let _span = debug_span!("build_romaji_dictionary", entries = vocabulary.len()).entered();
        let mut entries: HashMap<String, String> = HashMap::new();

        for entry in vocabulary {
            let romaji = entry.canonical_romaji();
            if romaji.is_empty() {
                continue;
            }
            let reading = entry.canonical_reading();
            if !reading.is_empty() {
                entries
                    .entry(reading.to_string())
                    .or_insert_with(|| romaji.to_string());
            }
            let japanese = entry.canonical_japanese();
            if !japanese.is_empty() && japanese != reading {
                entries
                    .entry(japanese.to_string())
                    .or_insert_with(|| romaji.to_string());
            }
        }

        for (ending, romaji) in &settings.romanizer.endings {
            entries
                .entry(ending.clone())
                .or_insert_with(|| romaji.clone());
        }

        debug!(keys = entries.len());
        Self { entries }
    }

    pub fn get(&self, unit: &str) -> Option<&str> {
        self.entries.get(unit).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token romanizer bound to one vocabulary snapshot.
pub struct Romanizer {
    dict: RomajiDictionary,
}

impl Romanizer {
    pub fn build(vocabulary: &[VocabularyEntry]) -> Self {
        Self::new(RomajiDictionary::build(vocabulary))
    }

    pub fn new(dict: RomajiDictionary) -> Self {
        Self { dict }
    }

    pub fn dictionary(&self) -> &RomajiDictionary {
        &self.dict
    }

    /// Romanize one unit: irregular particles, then the dictionary, then
    /// the transducer. A unit made only of marks the transducer drops
    /// (a lone っ or ー) is returned as-is, so non-empty input never
    /// romanizes to an empty string.
    pub fn romanize(&self, unit: &str) -> String {
        for (particle, romaji) in [TOPIC_PARTICLE, DIRECTION_PARTICLE] {
            if unit == particle {
                return romaji.to_string();
            }
        }
        if let Some(romaji) = self.dict.get(unit) {
            return romaji.to_string();
        }
        let romaji = transliterate(unit);
        if romaji.is_empty() {
            unit.to_string()
        } else {
            romaji
        }
    }

    /// Romanize each token. The blank marker is returned unchanged.
    pub fn romanize_tokens(&self, tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| {
                if t.is_blank() {
                    t.as_str().to_string()
                } else {
                    self.romanize(t.as_str())
                }
            })
            .collect()
    }

    /// Space-separated romaji line for display under a sentence.
    pub fn display_line(&self, tokens: &[Token]) -> String {
        self.romanize_tokens(tokens).join(" ")
    }

    /// Romaji with no separators, as typed in typing practice.
    pub fn reading_romaji(&self, tokens: &[Token]) -> String {
        self.romanize_tokens(tokens).concat()
    }
}
