use serde::Serialize;

use kotoba_core::tokenizer::TokenKind;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum KotobaError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Views (value types handed to the game modes)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenView {
    pub text: String,
    pub romaji: String,
    pub kind: TokenKind,
}

/// A segmented, romanized sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceView {
    /// Input with whitespace removed; equals the concatenated token texts.
    pub sentence: String,
    pub tokens: Vec<TokenView>,
    /// Token romaji joined with spaces.
    pub romaji_line: String,
    /// Token romaji joined without separators.
    pub typing_romaji: String,
}

impl SentenceView {
    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn has_blank(&self) -> bool {
        self.tokens.iter().any(|t| t.kind == TokenKind::Blank)
    }
}
