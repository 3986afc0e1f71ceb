//! Application-facing facade over `kotoba-core`.
//!
//! Loads study content, keeps the active content snapshot, and renders
//! sentences into token/romaji views for the game modes.

pub mod api;
pub mod trace_init;

pub use kotoba_core::{build_romanizer, build_tokenizer};
pub use kotoba_core::{romaji, settings, tokenizer, unicode, vocab};
