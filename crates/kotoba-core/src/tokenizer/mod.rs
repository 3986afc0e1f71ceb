//! Greedy longest-match segmentation of unspaced Japanese sentences.
//!
//! A `TokenDictionary` is built from the active vocabulary plus the fixed
//! grammar lexicon, then splits sentences into words, particles, endings
//! and the blank marker. Anything unknown falls back to one character.

mod dictionary;
#[cfg(test)]
mod tests;

pub use dictionary::TokenDictionary;

use std::fmt;

use serde::Serialize;

/// Reserved sentinel standing in for an elided word in fill-in-the-blank
/// sentences. Contains no kana or kanji, so it never collides with content.
pub const BLANK_MARKER: &str = "___";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Vocabulary reading or fixed phrase.
    Word,
    Particle,
    /// Verb/politeness ending or punctuation.
    Ending,
    Blank,
    /// Single character with no dictionary match.
    Unknown,
}

/// One segment of a sentence. Token texts concatenate back to the
/// whitespace-stripped sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn blank() -> Self {
        Self::new(BLANK_MARKER, TokenKind::Blank)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_blank(&self) -> bool {
        self.kind == TokenKind::Blank
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate token texts. Inverse of segmentation.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect()
}

/// Replace the first token equal to `word` with the blank marker.
///
/// Returns `None` when no token matches, so callers can skip sentences the
/// target word was segmented away from.
pub fn blank_out(tokens: &[Token], word: &str) -> Option<Vec<Token>> {
    let pos = tokens
        .iter()
        .position(|t| !t.is_blank() && t.as_str() == word)?;
    let mut out = tokens.to_vec();
    out[pos] = Token::blank();
    Some(out)
}
