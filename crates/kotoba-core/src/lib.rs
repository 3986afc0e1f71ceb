pub mod romaji;
pub mod settings;
#[cfg(test)]
pub(crate) mod testutil;
pub mod tokenizer;
pub mod unicode;
pub mod vocab;

use romaji::Romanizer;
use tokenizer::{Token, TokenDictionary};
use vocab::VocabularyEntry;

/// Build a segmentation function bound to a vocabulary snapshot.
pub fn build_tokenizer(
    vocabulary: &[VocabularyEntry],
) -> impl Fn(&str) -> Vec<Token> + Send + Sync + 'static {
    let dict = TokenDictionary::build(vocabulary);
    move |sentence: &str| dict.segment(sentence)
}

/// Build a romanization function bound to a vocabulary snapshot.
pub fn build_romanizer(
    vocabulary: &[VocabularyEntry],
) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let romanizer = Romanizer::build(vocabulary);
    move |unit: &str| romanizer.romanize(unit)
}
