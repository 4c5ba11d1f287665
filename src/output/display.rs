//! Display functions for the game and command results

use super::formatters::{closeness_bar, create_progress_bar, format_points};
use crate::commands::{CheckResult, RoundReport, SurveyResult};
use crate::core::{matched_positions, normalize_for_match};
use crate::game::{GameSession, GuessOutcome, Scoreboard, SolutionView};
use colored::Colorize;

/// Print the letters and rules of the current round
pub fn print_round(session: &GameSession) {
    let Some(round) = session.round() else {
        return;
    };
    let settings = session.settings();

    println!("{}", "─".repeat(60).cyan());
    println!(
        "{} · {} letters · {}",
        settings.theme.label().bright_cyan().bold(),
        settings.letter_count,
        settings.difficulty
    );
    println!("\n   {}\n", round.letters_display().bright_yellow().bold());
    println!("{}", session.rules());
    println!("{}", "─".repeat(60).cyan());
}

/// Print feedback for one submitted guess
pub fn print_guess_outcome(outcome: &GuessOutcome, input: &str, letters: &[u8]) {
    match outcome {
        GuessOutcome::Accepted(guess) => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                guess.display_word.bright_white().bold(),
                format_points(guess.points).green()
            );
            println!("  {}", guess.meaning.bright_black());
        }
        GuessOutcome::Rejected { reason, record, .. } => {
            println!(
                "{} {} {} [{}] {}%",
                "✗".red().bold(),
                record.word.bright_white(),
                reason.to_string().red(),
                closeness_bar(record.closest_percent, 10).yellow(),
                record.closest_percent
            );
        }
        GuessOutcome::Incomplete { matched } => {
            println!(
                "{} {} of {} letters in order: {}",
                "…".yellow(),
                matched,
                letters.len(),
                highlight_matches(input, letters)
            );
        }
    }
}

/// Uppercase `input` with the matched target letters highlighted
fn highlight_matches(input: &str, letters: &[u8]) -> String {
    let word = normalize_for_match(input);
    let positions = matched_positions(&word, letters);
    word.char_indices()
        .map(|(i, c)| {
            let c = c.to_ascii_uppercase().to_string();
            if positions.contains(&i) {
                c.green().bold().to_string()
            } else {
                c.bright_black().to_string()
            }
        })
        .collect()
}

/// Print the score and guess lists
pub fn print_scoreboard(board: &Scoreboard) {
    println!(
        "\n📊 {} {}",
        "Score:".bright_cyan().bold(),
        board.total_score().to_string().bright_yellow().bold()
    );
    if !board.accepted().is_empty() {
        println!("   {}", "Found:".green());
        for guess in board.accepted() {
            println!("     {:<20} {}", guess.display_word, format_points(guess.points));
        }
    }
    if !board.rejected().is_empty() {
        println!("   {}", "Wrong:".red());
        for guess in board.rejected() {
            println!("     {:<20} {:>3}% close", guess.word, guess.closest_percent);
        }
    }
}

/// Print every solution, marking the ones already found
pub fn print_solutions(solutions: &[SolutionView], board: &Scoreboard) {
    println!(
        "\n{} ({})",
        "All solutions".bright_cyan().bold(),
        solutions.len()
    );
    for solution in solutions {
        let mark = if board.has_accepted(&solution.word) {
            "✓".green().bold()
        } else {
            "·".bright_black()
        };
        println!(
            "  {mark} {} {}",
            solution.display.bright_white().bold(),
            solution.meaning.bright_black()
        );
    }
}

pub fn print_error(message: &str) {
    println!("{} {}", "!".red().bold(), message.red());
}

pub fn print_help() {
    println!("\nCommands:");
    println!("  /new [theme] [2-6] [easy|standard]  start a new round");
    println!("  /reveal                             show all solutions");
    println!("  /rules                              show the rules");
    println!("  /score                              show the scoreboard");
    println!("  /quit                               leave the game");
    println!("Anything else is a guess.\n");
}

/// Print the result of the check command
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {}", "CHECK:".bright_cyan().bold(), result.input.bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Normalized:  {}", result.normalized);
    println!("   Score:       {}", format_points(result.points));
    if let Some(target) = &result.target {
        let letters = String::from_utf8_lossy(target).to_uppercase();
        let verdict = if result.in_order {
            "in order".green()
        } else {
            "not in order".red()
        };
        println!(
            "   Letters:     {letters} · {}/{} matched · {verdict}",
            result.matched,
            target.len()
        );
    }

    let membership = if result.in_catalog {
        format!("yes ({})", result.display).green()
    } else {
        "no".red()
    };
    println!("   {}: {membership}", result.theme.label());
    if let Some(meaning) = &result.meaning {
        println!("   Meaning:     {meaning}");
    }
}

/// Print the result of the round command
pub fn print_round_report(report: &RoundReport) {
    println!(
        "\n{} · {} letters · {}",
        report.settings.theme.label().bright_cyan().bold(),
        report.settings.letter_count,
        report.settings.difficulty
    );
    println!("\n   {}\n", report.letters.bright_yellow().bold());
    println!("{}", report.rules);
    println!("Solutions: {}", report.solution_count.to_string().bright_white().bold());
    for solution in &report.solutions {
        println!(
            "  · {} {}",
            solution.display.bright_white(),
            solution.meaning.bright_black()
        );
    }
}

/// Print the result of a survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Settings:     {} · {} letters · {}",
        result.settings.theme.label(),
        result.settings.letter_count,
        result.settings.difficulty
    );
    println!("   Rounds:       {}", result.rounds);
    if result.failures > 0 {
        println!("   Failures:     {}", result.failures.to_string().red());
    }
    println!(
        "   Solutions:    min {} · median {:.1} · mean {} · max {}",
        result.min_solutions,
        result.median_solutions,
        format!("{:.1}", result.mean_solutions).bright_yellow().bold(),
        result.max_solutions
    );
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let generated = result.rounds - result.failures;
    for (label, count) in &result.distribution {
        let pct = if generated == 0 {
            0.0
        } else {
            (*count as f64 / generated as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {label:>8}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
