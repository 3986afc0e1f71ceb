//! Kana-to-romaji conversion.
//!
//! `Romanizer` answers from authored romanizations first and falls back to
//! a table-driven transducer that handles yōon (きゃ), sokuon (っ) and the
//! prolonged sound mark (ー).

mod config;
mod kana_table;
mod romanizer;
mod table;
mod transduce;

pub use config::{parse_kana_toml, KanaConfigError};
pub use kana_table::KanaTable;
pub use romanizer::{RomajiDictionary, Romanizer, DIRECTION_PARTICLE, TOPIC_PARTICLE};
pub use table::default_toml;
pub use transduce::{transliterate, transliterate_with};
