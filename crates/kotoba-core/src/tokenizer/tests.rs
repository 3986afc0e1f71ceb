use proptest::prelude::*;

use super::*;
use crate::settings::settings;
use crate::testutil::{empty_settings, entry, sample_vocabulary};

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::as_str).collect()
}

fn sample_dict() -> TokenDictionary {
    TokenDictionary::build(&sample_vocabulary())
}

#[test]
fn segments_words_and_particles() {
    let dict = sample_dict();
    let tokens = dict.segment("わたしはがくせいです。");
    assert_eq!(texts(&tokens), vec!["わたし", "は", "がくせい", "です", "。"]);
    let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Particle,
            TokenKind::Word,
            TokenKind::Ending,
            TokenKind::Ending,
        ]
    );
}

#[test]
fn strips_whitespace_before_matching() {
    let dict = sample_dict();
    let tokens = dict.segment(" わたし は　がっこう に いきます ");
    assert_eq!(texts(&tokens), vec!["わたし", "は", "がっこう", "に", "いきます"]);
}

#[test]
fn longest_match_keeps_exception_whole() {
    let dict = sample_dict();
    let tokens = dict.segment("ありがとうございます");
    assert_eq!(texts(&tokens), vec!["ありがとう", "ございます"]);
}

#[test]
fn greeting_not_split_on_particle() {
    let dict = sample_dict();
    let tokens = dict.segment("こんにちは");
    assert_eq!(texts(&tokens), vec!["こんにちは"]);
    assert_eq!(tokens[0].kind(), TokenKind::Word);
}

#[test]
fn longer_ending_wins_over_prefix() {
    let dict = sample_dict();
    let tokens = dict.segment("のみませんでした");
    assert_eq!(texts(&tokens), vec!["の", "み", "ませんでした"]);
    let tokens = dict.segment("のみます");
    assert_eq!(texts(&tokens), vec!["のみます"]);
}

#[test]
fn canonical_reading_only() {
    let dict = sample_dict();
    assert!(dict.contains("にほん"));
    assert!(!dict.contains("にっぽん"));
    assert!(!dict.contains("にほん / にっぽん"));
}

#[test]
fn fallback_is_one_char_per_token() {
    let dict = TokenDictionary::build_with(&[], &empty_settings());
    assert!(dict.is_empty());
    let tokens = dict.segment("xyz123");
    assert_eq!(texts(&tokens), vec!["x", "y", "z", "1", "2", "3"]);
    assert!(tokens.iter().all(|t| t.kind() == TokenKind::Unknown));
}

#[test]
fn unknown_kanji_fall_back_per_char() {
    let dict = sample_dict();
    let tokens = dict.segment("東京にいきます");
    assert_eq!(texts(&tokens), vec!["東", "京", "に", "いきます"]);
    assert_eq!(tokens[0].kind(), TokenKind::Unknown);
}

#[test]
fn blank_marker_is_atomic() {
    let dict = sample_dict();
    let sentence = format!("わたしは{BLANK_MARKER}です");
    let tokens = dict.segment(&sentence);
    assert_eq!(texts(&tokens), vec!["わたし", "は", BLANK_MARKER, "です"]);
    assert!(tokens[2].is_blank());
    assert_eq!(tokens.iter().filter(|t| t.is_blank()).count(), 1);
}

#[test]
fn blank_marker_found_without_any_lexicon() {
    let dict = TokenDictionary::build_with(&[], &empty_settings());
    let tokens = dict.segment(&format!("a{BLANK_MARKER}b"));
    assert_eq!(texts(&tokens), vec!["a", BLANK_MARKER, "b"]);
}

#[test]
fn blank_marker_in_vocabulary_is_ignored() {
    let vocab = vec![entry("", BLANK_MARKER, "blank")];
    let dict = TokenDictionary::build_with(&vocab, &empty_settings());
    assert!(dict.is_empty());
    assert!(dict.contains(BLANK_MARKER));
}

#[test]
fn empty_sentence_yields_no_tokens() {
    let dict = sample_dict();
    assert!(dict.segment("").is_empty());
    assert!(dict.segment(" \u{3000}\n").is_empty());
}

#[test]
fn vocabulary_word_keeps_first_kind() {
    // "は" (tooth) as vocabulary shadows the particle classification.
    let vocab = vec![entry("歯", "は", "ha")];
    let dict = TokenDictionary::build(&vocab);
    let tokens = dict.segment("は");
    assert_eq!(tokens[0].kind(), TokenKind::Word);
}

#[test]
fn candidates_sorted_longest_first_with_stable_ties() {
    let vocab = vec![
        entry("", "いぬ", ""),
        entry("", "ねこ", ""),
        entry("", "さかな", ""),
        entry("", "いぬ", ""),
    ];
    let dict = TokenDictionary::build_with(&vocab, &empty_settings());
    let order: Vec<&str> = dict.candidates().map(|(t, _)| t).collect();
    assert_eq!(order, vec!["さかな", "いぬ", "ねこ"]);
}

#[test]
fn empty_readings_are_discarded() {
    let vocab = vec![entry("猫", "", "neko"), entry("", "(note)", "")];
    let dict = TokenDictionary::build_with(&vocab, &empty_settings());
    assert!(dict.is_empty());
}

#[test]
fn reading_with_leading_space_is_discarded() {
    let vocab = vec![entry("お茶", " おちゃ", "ocha")];
    let dict = TokenDictionary::build_with(&vocab, &empty_settings());
    assert!(dict.is_empty());
    assert_eq!(texts(&dict.segment("おちゃ")), vec!["お", "ち", "ゃ"]);
}

#[test]
fn build_is_deterministic() {
    let a = sample_dict();
    let b = sample_dict();
    let order_a: Vec<_> = a.candidates().collect();
    let order_b: Vec<_> = b.candidates().collect();
    assert_eq!(order_a, order_b);
    assert_eq!(a.len(), b.len());
}

#[test]
fn includes_global_lexicon() {
    let dict = TokenDictionary::build(&[]);
    let lexicon = &settings().tokenizer;
    for word in lexicon
        .exceptions
        .iter()
        .chain(&lexicon.particles)
        .chain(&lexicon.endings)
    {
        assert!(dict.contains(word), "missing {word}");
    }
}

#[test]
fn join_tokens_round_trip() {
    let dict = sample_dict();
    let tokens = dict.segment("ねこはコーヒーをのみます。");
    assert_eq!(join_tokens(&tokens), "ねこはコーヒーをのみます。");
}

#[test]
fn blank_out_replaces_first_match() {
    let dict = sample_dict();
    let tokens = dict.segment("ねこはねこです");
    let blanked = blank_out(&tokens, "ねこ").unwrap();
    assert_eq!(texts(&blanked), vec![BLANK_MARKER, "は", "ねこ", "です"]);
    assert!(blanked[0].is_blank());
    // Re-segmenting the joined text recovers the same tokens.
    assert_eq!(dict.segment(&join_tokens(&blanked)), blanked);
}

#[test]
fn blank_out_missing_word() {
    let dict = sample_dict();
    let tokens = dict.segment("ねこです");
    assert!(blank_out(&tokens, "いぬ").is_none());
    // A word swallowed by a longer match is not a token of its own.
    let tokens = dict.segment("がっこう");
    assert!(blank_out(&tokens, "が").is_none());
}

fn arb_sentence() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "わたし", "は", "ねこ", "が", "を", "です", "ます", "。", " ", "\u{3000}", "東京",
        "x", "1", "っ", "ー", "ありがとう", "ござい", BLANK_MARKER, "_", "こん", "にち",
    ]);
    prop::collection::vec(pieces, 0..24).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn round_trip_reproduces_stripped_input(sentence in arb_sentence()) {
        let dict = sample_dict();
        let tokens = dict.segment(&sentence);
        let expected: String = sentence.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(join_tokens(&tokens), expected);
        prop_assert!(tokens.iter().all(|t| !t.as_str().is_empty()));
    }

    #[test]
    fn segmentation_is_deterministic(sentence in arb_sentence()) {
        let dict = sample_dict();
        prop_assert_eq!(dict.segment(&sentence), dict.segment(&sentence));
    }

    #[test]
    fn arbitrary_text_never_panics(sentence in "\\PC*") {
        let dict = sample_dict();
        let tokens = dict.segment(&sentence);
        let expected: String = sentence.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(join_tokens(&tokens), expected);
    }
}
