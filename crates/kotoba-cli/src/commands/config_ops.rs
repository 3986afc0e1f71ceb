use std::fs;

use kotoba_engine::romaji::parse_kana_toml;
use kotoba_engine::settings::parse_settings_toml;

use super::die;

pub fn kana_export() {
    print!("{}", kotoba_engine::api::kana_default_config());
}

pub fn kana_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_kana_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", kotoba_engine::api::settings_default_config());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: exceptions={}, particles={}, endings={}, romanized endings={}",
        s.tokenizer.exceptions.len(),
        s.tokenizer.particles.len(),
        s.tokenizer.endings.len(),
        s.romanizer.endings.len()
    );
}
