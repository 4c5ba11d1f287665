//! Text-mode game loop
//!
//! Reads one line at a time: a command or a guess.

use super::setup::SettingsOverrides;
use crate::core::{Difficulty, LetterCount, SettingsError, Theme};
use crate::game::GameSession;
use crate::output::{
    print_error, print_guess_outcome, print_help, print_round, print_scoreboard, print_solutions,
};
use crate::storage::Preferences;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a command line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("Unknown command '/{0}' (type /help for commands)")]
    UnknownCommand(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Empty,
    Guess(String),
    New(SettingsOverrides),
    Reveal,
    Rules,
    Score,
    Help,
    Quit,
}

/// Prefix that marks a line as a command rather than a guess
pub const COMMAND_PREFIX: char = '/';

/// Parse a line of input
///
/// Commands start with [`COMMAND_PREFIX`], so words like "reveal" or answers
/// like "New Zealand" stay guessable. `/new` takes optional settings in any
/// order, e.g. `/new capitals 3 easy`.
///
/// # Errors
///
/// Returns a `PlayError` for an unknown command or an unrecognized `/new`
/// argument.
pub fn parse_command(line: &str) -> Result<PlayCommand, PlayError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(PlayCommand::Empty);
    }
    let Some(command) = trimmed.strip_prefix(COMMAND_PREFIX) else {
        return Ok(PlayCommand::Guess(trimmed.to_string()));
    };

    let mut tokens = command.split_whitespace();
    let name = tokens.next().unwrap_or("help").to_lowercase();
    Ok(match name.as_str() {
        "quit" | "q" | "exit" => PlayCommand::Quit,
        "reveal" | "solutions" => PlayCommand::Reveal,
        "rules" => PlayCommand::Rules,
        "score" => PlayCommand::Score,
        "help" | "?" => PlayCommand::Help,
        "new" | "n" => PlayCommand::New(parse_overrides(tokens)?),
        _ => return Err(PlayError::UnknownCommand(name)),
    })
}

fn parse_overrides<'a>(
    tokens: impl Iterator<Item = &'a str>,
) -> Result<SettingsOverrides, SettingsError> {
    let mut overrides = SettingsOverrides::default();
    for token in tokens {
        if let Ok(count) = token.parse::<usize>() {
            overrides.letter_count = Some(LetterCount::new(count)?);
        } else if let Ok(difficulty) = token.parse::<Difficulty>() {
            overrides.difficulty = Some(difficulty);
        } else {
            overrides.theme = Some(token.parse::<Theme>()?);
        }
    }
    Ok(overrides)
}

/// Play until `/quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_play<R: BufRead>(
    session: &mut GameSession,
    settings: Preferences,
    mut input: R,
) -> Result<()> {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "              L E T T E R   T R A I L".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!("Type a word to guess, or '/help' for commands.\n");

    start_game(session, settings);

    let mut line = String::new();
    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_command(&line) {
            Err(e) => print_error(&e.to_string()),
            Ok(PlayCommand::Empty) => {}
            Ok(PlayCommand::Quit) => break,
            Ok(PlayCommand::Help) => print_help(),
            Ok(PlayCommand::Rules) => println!("{}", session.rules()),
            Ok(PlayCommand::Score) => print_scoreboard(session.scoreboard()),
            Ok(PlayCommand::New(overrides)) => {
                start_game(session, overrides.apply(session.settings()));
            }
            Ok(PlayCommand::Reveal) => match session.reveal_solutions() {
                Ok(solutions) => print_solutions(&solutions, session.scoreboard()),
                Err(e) => print_error(&e.to_string()),
            },
            Ok(PlayCommand::Guess(text)) => match session.submit_guess(&text) {
                Ok(outcome) => {
                    let letters = session
                        .round()
                        .map(|round| round.target_letters().to_vec())
                        .unwrap_or_default();
                    print_guess_outcome(&outcome, &text, &letters);
                }
                Err(e) => print_error(&e.to_string()),
            },
        }
    }

    print_scoreboard(session.scoreboard());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn start_game(session: &mut GameSession, settings: Preferences) {
    match session.start_new_game(settings) {
        Ok(()) => print_round(session),
        Err(e) => print_error(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;
    use crate::game::testing::{ScriptedLookup, dictionary_session, settings};
    use crate::catalog::{RawCatalog, RawRecord, StaticProvider};
    use crate::storage::{MemoryPreferences, TtlCache};
    use std::io::Cursor;
    use std::sync::Arc;

    #[test]
    fn commands_parse() {
        assert_eq!(parse_command("  "), Ok(PlayCommand::Empty));
        assert_eq!(parse_command("/QUIT\n"), Ok(PlayCommand::Quit));
        assert_eq!(parse_command("/reveal"), Ok(PlayCommand::Reveal));
        assert_eq!(parse_command("/"), Ok(PlayCommand::Help));
        assert_eq!(parse_command(" Kite \n"), Ok(PlayCommand::Guess("Kite".into())));
        assert_eq!(
            parse_command("/kite"),
            Err(PlayError::UnknownCommand("kite".into()))
        );
    }

    #[test]
    fn command_words_without_prefix_are_guesses() {
        for line in ["reveal", "quit", "help", "score", "New Zealand", "new delhi"] {
            assert_eq!(
                parse_command(line),
                Ok(PlayCommand::Guess(line.into())),
                "{line}"
            );
        }
    }

    #[test]
    fn new_takes_settings_in_any_order() {
        let Ok(PlayCommand::New(overrides)) = parse_command("/new easy 3 capitals") else {
            panic!("expected new");
        };
        assert_eq!(overrides.theme, Some(Theme::Capitals));
        assert_eq!(overrides.letter_count.map(LetterCount::get), Some(3));
        assert_eq!(overrides.difficulty, Some(Difficulty::Easy));

        assert_eq!(
            parse_command("/new 9"),
            Err(PlayError::Settings(SettingsError::InvalidLetterCount(9)))
        );
        assert!(matches!(
            parse_command("/new planets"),
            Err(PlayError::Settings(SettingsError::UnknownTheme(_)))
        ));
    }

    #[test]
    fn scripted_game_scores_and_reveals() {
        let mut session = dictionary_session(&["kite", "ox"], ScriptedLookup::new());
        let script = Cursor::new("kit\nkite\nkite\n/reveal\nkite\n/quit\n");

        run_play(&mut session, settings(Theme::Dictionary, 4), script).unwrap();

        assert_eq!(session.state(), SessionState::RoundActive);
        assert_eq!(session.scoreboard().total_score(), 12);
        assert_eq!(session.scoreboard().rejected().len(), 1);
        assert!(session.round().unwrap().is_revealed());
    }

    #[test]
    fn command_words_play_as_guesses() {
        let mut session = dictionary_session(&["reveal", "ox"], ScriptedLookup::new());
        let script = Cursor::new("reveal\n/quit\n");

        run_play(&mut session, settings(Theme::Dictionary, 4), script).unwrap();

        let round = session.round().unwrap();
        assert!(!round.is_revealed());
        assert_eq!(session.scoreboard().accepted().len(), 1);
        assert_eq!(session.scoreboard().accepted()[0].word, "reveal");
    }

    #[test]
    fn multi_word_answers_play_as_guesses() {
        let provider = StaticProvider::new().with(
            Theme::Countries,
            RawCatalog::Records(vec![RawRecord {
                word: Some("newzealand".into()),
                display: Some("New Zealand".into()),
                meaning: None,
            }]),
        );
        let mut session = GameSession::new(
            Box::new(provider),
            Arc::new(ScriptedLookup::new()),
            Arc::new(TtlCache::in_memory()),
            Box::new(MemoryPreferences::default()),
        )
        .with_seed(7);
        let script = Cursor::new("New Zealand\n/quit\n");

        run_play(&mut session, settings(Theme::Countries, 4), script).unwrap();

        assert_eq!(session.scoreboard().accepted().len(), 1);
        assert_eq!(session.scoreboard().accepted()[0].display_word, "New Zealand");
    }

    #[test]
    fn end_of_input_ends_the_game() {
        let mut session = dictionary_session(&["kite"], ScriptedLookup::new());
        run_play(&mut session, settings(Theme::Dictionary, 4), Cursor::new("")).unwrap();
        assert_eq!(session.state(), SessionState::RoundActive);
    }
}
