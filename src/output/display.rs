//! Display functions for command results

use super::formatters::{create_progress_bar, percent, spaced_pattern};
use crate::commands::{AnalysisResult, SimulationResult};
use crate::game::{Diagnostic, SelectionReason};
use colored::Colorize;

/// Print one diagnostic event (used by `--debug`)
pub fn print_diagnostic(diagnostic: &Diagnostic) {
    let text = format!(
        "[{} '{}', {} classes] {}",
        diagnostic.difficulty, diagnostic.guess, diagnostic.class_count, diagnostic
    );
    for line in text.lines() {
        println!("{}", line.bright_black());
    }
}

/// Print the result of letter analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' on turn {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold(),
        result.turn
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words of length {} split into {} classes:\n",
        result.total_candidates,
        result.word_length,
        result.classes.len()
    );

    for (i, class) in result.classes.iter().enumerate() {
        let share = class.size as f64 / result.total_candidates as f64;
        let bar = create_progress_bar(share, 1.0, 20);
        let more = if class.size > class.sample.len() { ", ..." } else { "" };
        println!(
            "   {:>2}. {}  [{}] {:5} ({:>6})  {}{}",
            i + 1,
            spaced_pattern(&class.pattern).bright_white(),
            bar.green(),
            class.size,
            percent(share),
            class.sample.join(", ").bright_black(),
            more.bright_black()
        );
    }

    println!("\n🎯 {}", "Kept class:".bright_cyan().bold());
    for pick in &result.picks {
        let Some(class) = result.classes.get(pick.index) else {
            continue;
        };
        let note = match pick.reason {
            SelectionReason::AlwaysHardest | SelectionReason::Hardest => "hardest",
            SelectionReason::SecondHardest => "second hardest (concession)",
            SelectionReason::OnlyOneClass => "hardest (only one class)",
        };
        println!(
            "   {:<7} #{} {}  {} words left, {} eliminated, {}",
            pick.difficulty.name(),
            pick.index + 1,
            class.pattern.to_string().bright_yellow(),
            class.size,
            percent(result.eliminated_fraction(pick.index)),
            note
        );
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    let config = &result.config;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⚙️  {}", "Setup:".bright_cyan().bold());
    println!("   Rounds per tier:  {}", config.rounds);
    println!("   Word length:      {}", config.word_length);
    println!("   Guess budget:     {}", config.guess_budget);
    println!("   Player:           {:?}", config.player);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Win rate by difficulty:".bright_cyan().bold());
    for stats in &result.statistics {
        let rate = stats.win_rate();
        let bar = create_progress_bar(rate, 1.0, 30);
        let colored_bar = if rate >= 0.5 { bar.green() } else { bar.red() };
        println!(
            "   {:<7} {} {:>6}  ({}/{})",
            stats.difficulty.name(),
            colored_bar,
            percent(rate).bright_yellow().bold(),
            stats.wins,
            stats.rounds
        );
        println!(
            "           avg wrong guesses: {:.2}, avg letters tried: {:.2}",
            stats.average_wrong_guesses, stats.average_letters
        );
    }
}
