//! Character-level Unicode classification for Japanese text.

/// Small tsu in both scripts. Marks gemination of the next consonant.
pub const SOKUON: [char; 2] = ['っ', 'ッ'];

/// Prolonged sound mark. Extends the preceding vowel.
pub const CHOONPU: char = 'ー';

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in study content,
/// so the block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Lowercase romaji vowel.
pub fn is_romaji_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            // Only the syllable range shifts cleanly; iteration marks and
            // the digraph ゟ have no katakana counterpart at +0x60.
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// A study reading written in hiragana only. ー is allowed (`らーめん`);
/// katakana loanword readings such as `コーヒー` are not.
pub fn is_hiragana_reading(reading: &str) -> bool {
    let mut chars = reading.chars().peekable();
    chars.peek().is_some() && chars.all(|c| c == CHOONPU || is_hiragana(c))
}

/// Remove every whitespace character, including the ideographic space U+3000.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
