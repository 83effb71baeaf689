use std::path::PathBuf;

use clap::{Parser, Subcommand};

use yomi_cli::commands::{config_ops, read_ops};
use yomi_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "yomitool", about = "Japanese numeral readings")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for JSON trace logs (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reading of a non-negative integer
    Read {
        /// Value to read
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// H (hiragana), K (katakana) or J (kanji)
        #[arg(short, long)]
        script: Option<String>,
    },
    /// Print readings for every value of an inclusive range
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
        /// H (hiragana), K (katakana) or J (kanji)
        #[arg(short, long)]
        script: Option<String>,
        /// Only read multiples of 3 and values containing 3; print the rest as digits
        #[arg(long)]
        nabeatsu: bool,
        /// Output as a JSON array instead of lines
        #[arg(long)]
        json: bool,
    },
    /// Show the fragments emitted for each decimal place
    Explain {
        /// Value to explain
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// H (hiragana), K (katakana) or J (kanji)
        #[arg(short, long)]
        script: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        init_tracing(dir);
    }
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Read { value, script } => read_ops::read_cmd(&value, script.as_deref()),
        Command::Range {
            start,
            end,
            script,
            nabeatsu,
            json,
        } => read_ops::range_cmd(start, end, script.as_deref(), nabeatsu, json),
        Command::Explain {
            value,
            script,
            json,
        } => read_ops::explain_cmd(&value, script.as_deref(), json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
