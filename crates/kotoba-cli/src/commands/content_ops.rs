use std::collections::BTreeMap;
use std::path::Path;

use kotoba_engine::api::{filter_entries, load_content_dir, ContentSnapshot};
use kotoba_engine::unicode::{is_hiragana_reading, is_kanji};
use kotoba_engine::vocab::VocabularyEntry;

use super::die;

/// Load content from `dir` (or nothing) and build a snapshot.
pub fn load_snapshot(dir: Option<&str>, units: &[u32], category: Option<&str>) -> ContentSnapshot {
    let entries = match dir {
        Some(dir) => {
            let all = die!(
                load_content_dir(Path::new(dir)),
                "Error loading content: {}"
            );
            filter_entries(&all, units, category)
        }
        None => Vec::new(),
    };
    ContentSnapshot::build(entries)
}

pub fn content_info(dir: &str) {
    let entries = die!(
        load_content_dir(Path::new(dir)),
        "Error loading content: {}"
    );
    println!("{}", summarize(&entries));
}

/// Entry counts per unit and category, plus dictionary coverage.
pub fn summarize(entries: &[VocabularyEntry]) -> String {
    let mut by_unit: BTreeMap<u32, BTreeMap<&str, usize>> = BTreeMap::new();
    for e in entries {
        *by_unit
            .entry(e.unit)
            .or_default()
            .entry(e.category.as_str())
            .or_default() += 1;
    }

    let mut lines = vec![format!("entries: {}", entries.len())];
    for (unit, categories) in &by_unit {
        let parts: Vec<String> = categories
            .iter()
            .map(|(category, n)| format!("{category}={n}"))
            .collect();
        lines.push(format!("unit {unit:>3}: {}", parts.join(", ")));
    }

    let snapshot = ContentSnapshot::build(entries.to_vec());
    lines.push(format!(
        "token candidates: {}, romaji keys: {}",
        snapshot.token_dictionary().len(),
        snapshot.romanizer().dictionary().len()
    ));
    let missing = entries
        .iter()
        .filter(|e| e.canonical_reading().is_empty())
        .count();
    if missing > 0 {
        lines.push(format!("entries without a reading: {missing}"));
    }
    // Katakana readings still segment katakana sentences; kanji ones never match.
    let odd: Vec<&str> = entries
        .iter()
        .map(|e| e.canonical_reading())
        .filter(|r| !r.is_empty() && !is_hiragana_reading(r))
        .collect();
    if !odd.is_empty() {
        let kanji = odd.iter().filter(|r| r.chars().any(is_kanji)).count();
        lines.push(format!(
            "readings not in hiragana: {} ({kanji} with kanji)",
            odd.len()
        ));
    }
    lines.join("\n")
}
