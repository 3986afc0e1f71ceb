use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_kana_toml, KanaConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Kana → romaji lookup for one or two kana.
pub struct KanaTable {
    entries: HashMap<String, String>,
}

impl KanaTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanaConfigError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_kana_toml(toml_str).expect("kana TOML must be valid");
            KanaTable {
                entries: map.into_iter().collect(),
            }
        })
    }

    /// Build a standalone table, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, KanaConfigError> {
        Ok(KanaTable {
            entries: parse_kana_toml(toml_str)?.into_iter().collect(),
        })
    }

    pub fn lookup(&self, kana: &str) -> Option<&str> {
        self.entries.get(kana).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("あ"), Some("a"));
        assert_eq!(table.lookup("オ"), Some("o"));
    }

    #[test]
    fn test_youon() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("しゃ"), Some("sha"));
        assert_eq!(table.lookup("きょ"), Some("kyo"));
        assert_eq!(table.lookup("チュ"), Some("chu"));
    }

    #[test]
    fn test_irregular_spellings() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("し"), Some("shi"));
        assert_eq!(table.lookup("ち"), Some("chi"));
        assert_eq!(table.lookup("つ"), Some("tsu"));
        assert_eq!(table.lookup("ふ"), Some("fu"));
        assert_eq!(table.lookup("を"), Some("wo"));
        assert_eq!(table.lookup("ん"), Some("n"));
    }

    #[test]
    fn test_marks_not_in_table() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("っ"), None);
        assert_eq!(table.lookup("ー"), None);
    }

    #[test]
    fn test_none_for_unknown() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("猫"), None);
        assert_eq!(table.lookup("x"), None);
    }

    #[test]
    fn test_all_mappings_present() {
        let table = KanaTable::global();
        let map = parse_kana_toml(DEFAULT_TOML).unwrap();
        assert_eq!(table.len(), map.len());
        for (kana, romaji) in &map {
            assert_eq!(table.lookup(kana), Some(romaji.as_str()), "kana={kana}");
        }
    }

    #[test]
    fn test_from_toml_is_independent() {
        let table = KanaTable::from_toml("[mappings]\n\"あ\" = \"ah\"\n").unwrap();
        assert_eq!(table.lookup("あ"), Some("ah"));
        assert_eq!(table.lookup("か"), None);
        assert_eq!(KanaTable::global().lookup("あ"), Some("a"));
    }
}
