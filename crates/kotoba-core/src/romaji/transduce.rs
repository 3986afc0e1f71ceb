use tracing::trace;

use super::kana_table::KanaTable;
use crate::unicode::{is_romaji_vowel, CHOONPU, SOKUON};

/// Transliterate kana to romaji character by character using the global table.
pub fn transliterate(kana: &str) -> String {
    transliterate_with(KanaTable::global(), kana)
}

/// Transliterate kana to romaji against an explicit table.
///
/// Digraphs are tried before single kana. っ doubles the first consonant of
/// the next syllable and ー repeats the previous vowel; both emit nothing
/// when that context is missing. Characters outside the table pass through.
pub fn transliterate_with(table: &KanaTable, kana: &str) -> String {
    // Byte offset of every char boundary, plus the end of the string.
    let bounds: Vec<usize> = kana
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(kana.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let mut out = String::with_capacity(kana.len());

    let mut i = 0;
    while i < char_count {
        let piece = &kana[bounds[i]..bounds[i + 1]];
        let ch = piece.chars().next().unwrap_or_default();

        if SOKUON.contains(&ch) {
            if let Some((next, _)) = syllable_at(table, kana, &bounds, i + 1) {
                if let Some(first) = next.chars().next() {
                    if first.is_ascii_alphabetic() && !is_romaji_vowel(first) {
                        out.push(first);
                    }
                }
            }
            i += 1;
            continue;
        }

        if ch == CHOONPU {
            if let Some(last) = out.chars().last() {
                if is_romaji_vowel(last) {
                    out.push(last);
                }
            }
            i += 1;
            continue;
        }

        match syllable_at(table, kana, &bounds, i) {
            Some((romaji, consumed)) => {
                out.push_str(romaji);
                i += consumed;
            }
            None => {
                trace!(piece, "no kana mapping, passing through");
                out.push_str(piece);
                i += 1;
            }
        }
    }

    out
}

/// Romaji for the syllable starting at char `i`, with the number of chars it spans.
fn syllable_at<'t>(
    table: &'t KanaTable,
    kana: &str,
    bounds: &[usize],
    i: usize,
) -> Option<(&'t str, usize)> {
    let char_count = bounds.len() - 1;
    if i >= char_count {
        return None;
    }
    if i + 2 <= char_count {
        if let Some(romaji) = table.lookup(&kana[bounds[i]..bounds[i + 2]]) {
            return Some((romaji, 2));
        }
    }
    table
        .lookup(&kana[bounds[i]..bounds[i + 1]])
        .map(|romaji| (romaji, 1))
}
