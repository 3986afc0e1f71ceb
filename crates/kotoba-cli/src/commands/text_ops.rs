use unicode_width::UnicodeWidthStr;

use kotoba_engine::api::{ContentSnapshot, SentenceView};

use super::die;

pub fn tokenize_cmd(snapshot: &ContentSnapshot, sentence: &str, json: bool) {
    let tokens = snapshot.tokenize(sentence);
    let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    if json {
        let out = die!(serde_json::to_string(&texts), "Error encoding JSON: {}");
        println!("{out}");
    } else {
        println!("{}", texts.join(" | "));
    }
}

pub fn romanize_cmd(snapshot: &ContentSnapshot, units: &[String]) {
    for unit in units {
        println!("{unit}\t{}", snapshot.romanize(unit));
    }
}

pub fn view_cmd(snapshot: &ContentSnapshot, sentence: &str, blank: Option<&str>, json: bool) {
    let view = match blank {
        Some(word) => match snapshot.fill_in_blank(sentence, word) {
            Some(view) => view,
            None => {
                eprintln!("Error: {word:?} is not a token of the sentence");
                std::process::exit(1);
            }
        },
        None => snapshot.view(sentence),
    };

    if json {
        let out = die!(
            serde_json::to_string_pretty(&view),
            "Error encoding JSON: {}"
        );
        println!("{out}");
    } else {
        print!("{}", render_table(&view));
    }
}

/// Three aligned rows: token text, romaji, kind.
pub fn render_table(view: &SentenceView) -> String {
    let kinds: Vec<String> = view
        .tokens
        .iter()
        .map(|t| format!("{:?}", t.kind).to_lowercase())
        .collect();
    let widths: Vec<usize> = view
        .tokens
        .iter()
        .zip(&kinds)
        .map(|(t, kind)| t.text.width().max(t.romaji.width()).max(kind.width()))
        .collect();

    let row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell}{}", " ".repeat(w - cell.width())))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&row(view.tokens.iter().map(|t| t.text.as_str()).collect()));
    out.push('\n');
    out.push_str(&row(view.tokens.iter().map(|t| t.romaji.as_str()).collect()));
    out.push('\n');
    out.push_str(&row(kinds.iter().map(|k| k.as_str()).collect()));
    out.push('\n');
    out.push_str(&format!("typing: {}\n", view.typing_romaji));
    out
}
