use std::cmp::Reverse;
use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::{Token, TokenKind, BLANK_MARKER};
use crate::settings::{settings, Settings};
use crate::unicode::strip_whitespace;
use crate::vocab::VocabularyEntry;

struct Candidate {
    text: String,
    kind: TokenKind,
}

/// Candidate list for greedy segmentation, bound to one vocabulary snapshot.
///
/// Immutable once built; rebuild it when the vocabulary changes.
pub struct TokenDictionary {
    /// Sorted by descending char length; ties keep insertion order.
    candidates: Vec<Candidate>,
}

impl TokenDictionary {
    /// Build from vocabulary and the global grammar lexicon.
    pub fn build(vocabulary: &[VocabularyEntry]) -> Self {
        Self::build_with(vocabulary, settings())
    }

    /// Build from vocabulary and an explicit grammar lexicon.
    ///
    /// Insertion order is vocabulary readings, exceptions, particles, then
    /// endings. A string already inserted keeps its first kind.
    pub fn build_with(vocabulary: &[VocabularyEntry], settings: &Settings) -> Self {
        let _span = debug_span!("build_token_dictionary", entries = vocabulary.len()).entered();
        let lexicon = &settings.tokenizer;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        let words = vocabulary
            .iter()
            .map(|e| (e.canonical_reading(), TokenKind::Word))
            .chain(lexicon.exceptions.iter().map(|w| (w.as_str(), TokenKind::Word)));
        let grammar = lexicon
            .particles
            .iter()
            .map(|w| (w.as_str(), TokenKind::Particle))
            .chain(lexicon.endings.iter().map(|w| (w.as_str(), TokenKind::Ending)));

        for (text, kind) in words.chain(grammar) {
            if text.is_empty() || text == BLANK_MARKER || !seen.insert(text) {
                continue;
            }
            candidates.push(Candidate {
                text: text.to_string(),
                kind,
            });
        }

        // Stable sort: equal lengths keep insertion order.
        candidates.sort_by_key(|c| Reverse(c.text.chars().count()));

        debug!(candidates = candidates.len());
        Self { candidates }
    }

    /// Split a sentence into tokens.
    ///
    /// Whitespace is removed first. At each position the blank marker is
    /// tried, then every candidate longest first; with no match a single
    /// character is emitted. Never fails and never emits an empty token.
    pub fn segment(&self, sentence: &str) -> Vec<Token> {
        let text = strip_whitespace(sentence);
        let _span = debug_span!("segment", chars = text.chars().count()).entered();

        let mut tokens = Vec::new();
        let mut rest = text.as_str();
        while !rest.is_empty() {
            if rest.starts_with(BLANK_MARKER) {
                tokens.push(Token::blank());
                rest = &rest[BLANK_MARKER.len()..];
                continue;
            }

            if let Some(c) = self
                .candidates
                .iter()
                .find(|c| rest.starts_with(c.text.as_str()))
            {
                tokens.push(Token::new(c.text.as_str(), c.kind));
                rest = &rest[c.text.len()..];
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            tokens.push(Token::new(ch, TokenKind::Unknown));
            rest = &rest[ch.len_utf8()..];
        }

        debug!(tokens = tokens.len());
        tokens
    }

    /// Whether `text` is a segmentation candidate.
    pub fn contains(&self, text: &str) -> bool {
        text == BLANK_MARKER || self.candidates.iter().any(|c| c.text == text)
    }

    /// Number of candidates, excluding the blank marker.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in match order.
    pub fn candidates(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.candidates.iter().map(|c| (c.text.as_str(), c.kind))
    }
}
