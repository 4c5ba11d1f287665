//! Letter Trail - CLI
//!
//! Find words that contain the given letters in order.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letter_trail::{
    commands::{
        SessionOptions, SettingsOverrides, build_session, check_word, generate_round,
        load_catalog, resolve_settings, run_play, run_survey,
    },
    core::{Difficulty, LetterCount, Theme},
    output::{print_check_result, print_round_report, print_survey_result},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letter_trail",
    about = "Find words that contain the given letters in order",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme: dictionary, pokemon, countries, capitals (default: last used)
    #[arg(short, long, global = true)]
    theme: Option<Theme>,

    /// Number of target letters, 2-6 (default: last used)
    #[arg(short, long, global = true, value_parser = parse_letter_count)]
    letters: Option<LetterCount>,

    /// Difficulty: easy (consecutive letters) or standard (default: last used)
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Directory for the cache and saved preferences
    #[arg(long, global = true, default_value = ".letter_trail")]
    state_dir: PathBuf,

    /// Use embedded data only and skip remote word validation
    #[arg(long, global = true)]
    offline: bool,

    /// Seed for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Custom dictionary word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Base URL serving english_words.txt, countries.json and capitals.json
    #[arg(long, global = true)]
    data_url: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Generate one round and print it
    Round {
        /// Also list every solution with its meaning
        #[arg(short, long)]
        solutions: bool,
    },

    /// Show how a word is normalized, matched and scored
    Check {
        /// The word to check
        word: String,

        /// Target letters to match against, e.g. "kte"
        #[arg(short = 'a', long)]
        against: Option<String>,
    },

    /// Generate many rounds and report solution-count statistics
    Survey {
        /// Number of rounds to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn parse_letter_count(value: &str) -> Result<LetterCount, String> {
    let count: usize = value.parse().map_err(|_| format!("'{value}' is not a number"))?;
    LetterCount::new(count).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = SessionOptions {
        state_dir: cli.state_dir,
        offline: cli.offline,
        seed: cli.seed,
        wordlist: cli.wordlist,
        data_url: cli.data_url,
    };
    let overrides = SettingsOverrides {
        theme: cli.theme,
        letter_count: cli.letters,
        difficulty: cli.difficulty,
    };
    let settings = resolve_settings(&options, overrides);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = build_session(&options)?;
            run_play(&mut session, settings, io::stdin().lock())
        }
        Commands::Round { solutions } => {
            let mut session = build_session(&options)?;
            let report = generate_round(&mut session, settings, solutions)?;
            print_round_report(&report);
            Ok(())
        }
        Commands::Check { word, against } => {
            let catalog = load_catalog(&options, settings.theme)?;
            let result = check_word(&word, against.as_deref(), settings.theme, &catalog)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Survey { count } => {
            let mut session = build_session(&options)?;
            println!("🎯 Generating {count} rounds...");
            let result = run_survey(&mut session, settings, count)?;
            print_survey_result(&result);
            Ok(())
        }
    }
}
