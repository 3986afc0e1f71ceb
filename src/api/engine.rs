use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug_span;

use kotoba_core::romaji::Romanizer;
use kotoba_core::tokenizer::{blank_out, join_tokens, Token, TokenDictionary};
use kotoba_core::vocab::VocabularyEntry;

use super::{SentenceView, TokenView};

/// Tokenizer and romanizer built from one vocabulary set.
pub struct ContentSnapshot {
    vocabulary: Vec<VocabularyEntry>,
    tokens: TokenDictionary,
    romanizer: Romanizer,
}

impl ContentSnapshot {
    pub fn build(vocabulary: Vec<VocabularyEntry>) -> Self {
        let _span = debug_span!("build_snapshot", entries = vocabulary.len()).entered();
        let tokens = TokenDictionary::build(&vocabulary);
        let romanizer = Romanizer::build(&vocabulary);
        Self {
            vocabulary,
            tokens,
            romanizer,
        }
    }

    pub fn vocabulary(&self) -> &[VocabularyEntry] {
        &self.vocabulary
    }

    pub fn token_dictionary(&self) -> &TokenDictionary {
        &self.tokens
    }

    pub fn romanizer(&self) -> &Romanizer {
        &self.romanizer
    }

    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        self.tokens.segment(sentence)
    }

    pub fn romanize(&self, unit: &str) -> String {
        self.romanizer.romanize(unit)
    }

    /// Segment and romanize a sentence.
    pub fn view(&self, sentence: &str) -> SentenceView {
        self.view_tokens(self.tokenize(sentence))
    }

    /// Segment a sentence and blank out the first occurrence of `word`.
    ///
    /// Returns `None` when `word` is not one of the sentence's tokens.
    pub fn fill_in_blank(&self, sentence: &str, word: &str) -> Option<SentenceView> {
        let tokens = blank_out(&self.tokenize(sentence), word)?;
        Some(self.view_tokens(tokens))
    }

    fn view_tokens(&self, tokens: Vec<Token>) -> SentenceView {
        let romaji = self.romanizer.romanize_tokens(&tokens);
        let sentence = join_tokens(&tokens);
        let romaji_line = romaji.join(" ");
        let typing_romaji = romaji.concat();
        let tokens = tokens
            .into_iter()
            .zip(romaji)
            .map(|(token, romaji)| TokenView {
                kind: token.kind(),
                text: token.into_string(),
                romaji,
            })
            .collect();
        SentenceView {
            sentence,
            tokens,
            romaji_line,
            typing_romaji,
        }
    }
}

/// Holds the active content snapshot.
///
/// `load_content` builds the replacement outside the lock and swaps it in;
/// callers holding an older `Arc<ContentSnapshot>` keep using it unchanged.
pub struct StudyEngine {
    current: RwLock<Arc<ContentSnapshot>>,
}

impl StudyEngine {
    pub fn new(vocabulary: Vec<VocabularyEntry>) -> Self {
        Self {
            current: RwLock::new(Arc::new(ContentSnapshot::build(vocabulary))),
        }
    }

    pub fn snapshot(&self) -> Arc<ContentSnapshot> {
        // The guarded value is a single Arc; a poisoned lock still holds a
        // complete snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn load_content(&self, vocabulary: Vec<VocabularyEntry>) {
        let next = Arc::new(ContentSnapshot::build(vocabulary));
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }

    pub fn view(&self, sentence: &str) -> SentenceView {
        self.snapshot().view(sentence)
    }
}

impl Default for StudyEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
