use clap::{Args, Parser, Subcommand};

use kotoba_cli::commands::{config_ops, content_ops, text_ops};
use kotoba_engine::api;

#[derive(Parser)]
#[command(name = "kotool", about = "Kotoba sentence tokenizer and romanizer")]
struct Cli {
    /// Custom kana table TOML (replaces the embedded default)
    #[arg(long, global = true)]
    kana: Option<String>,
    /// Custom grammar lexicon TOML (replaces the embedded default)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ContentArgs {
    /// Directory of per-unit JSON content files
    #[arg(long)]
    content: Option<String>,
    /// Only use these units (repeatable)
    #[arg(long = "unit")]
    units: Vec<u32>,
    /// Only use this category (e.g. Vocabulary, Grammar)
    #[arg(long)]
    category: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Split a sentence into tokens
    Tokenize {
        sentence: String,
        #[command(flatten)]
        content: ContentArgs,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Romanize one or more units (words, particles, endings)
    Romanize {
        #[arg(required = true)]
        units: Vec<String>,
        #[command(flatten)]
        content: ContentArgs,
    },
    /// Show tokens, romaji and kinds for a sentence
    View {
        sentence: String,
        #[command(flatten)]
        content: ContentArgs,
        /// Replace this word with the blank marker
        #[arg(long)]
        blank: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Summarize a content directory
    ContentInfo {
        /// Directory of per-unit JSON content files
        dir: String,
    },
    /// Export the default kana table as TOML
    KanaExport,
    /// Validate a custom kana table TOML file
    KanaValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default grammar lexicon as TOML
    SettingsExport,
    /// Validate a custom grammar lexicon TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn snapshot(args: &ContentArgs) -> api::ContentSnapshot {
    content_ops::load_snapshot(
        args.content.as_deref(),
        &args.units,
        args.category.as_deref(),
    )
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        api::trace_init(dir);
    }
    if let Some(path) = &cli.kana {
        if let Err(e) = api::kana_load_config(path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    if let Some(path) = &cli.settings {
        if let Err(e) = api::settings_load_config(path) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Tokenize {
            sentence,
            content,
            json,
        } => text_ops::tokenize_cmd(&snapshot(&content), &sentence, json),
        Command::Romanize { units, content } => text_ops::romanize_cmd(&snapshot(&content), &units),
        Command::View {
            sentence,
            content,
            blank,
            json,
        } => text_ops::view_cmd(&snapshot(&content), &sentence, blank.as_deref(), json),
        Command::ContentInfo { dir } => content_ops::content_info(&dir),
        Command::KanaExport => config_ops::kana_export(),
        Command::KanaValidate { file } => config_ops::kana_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
