use std::collections::BTreeMap;

use crate::settings::{RomanizerSettings, Settings, TokenizerSettings};
use crate::vocab::VocabularyEntry;

/// Vocabulary entry with the fields the engine reads.
pub fn entry(japanese: &str, hiragana: &str, romaji: &str) -> VocabularyEntry {
    VocabularyEntry {
        unit: 1,
        category: "Vocabulary".to_string(),
        japanese: japanese.to_string(),
        hiragana: hiragana.to_string(),
        romaji: romaji.to_string(),
        ..Default::default()
    }
}

/// A small study set used across tokenizer and romanizer tests.
pub fn sample_vocabulary() -> Vec<VocabularyEntry> {
    vec![
        entry("私", "わたし", "watashi"),
        entry("猫", "ねこ", "neko"),
        entry("学生", "がくせい", "gakusei"),
        entry("学校", "がっこう", "gakkou"),
        entry("行きます", "いきます", "ikimasu"),
        entry("日本", "にほん / にっぽん", "nihon / nippon"),
        entry("コーヒー", "コーヒー", "koohii"),
        entry("飲みます", "のみます", "nomimasu"),
    ]
}

/// Lexicon with no exceptions, particles, endings or romanized endings.
pub fn empty_settings() -> Settings {
    Settings {
        tokenizer: TokenizerSettings {
            exceptions: Vec::new(),
            particles: Vec::new(),
            endings: Vec::new(),
        },
        romanizer: RomanizerSettings {
            endings: BTreeMap::new(),
        },
    }
}
