pub(super) const DEFAULT_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
