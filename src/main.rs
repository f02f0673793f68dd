//! Evil Hangman - CLI
//!
//! Interactive game, automated simulation and partition analysis for an
//! adversary that never commits to a secret word.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{Player, SimulationConfig, analyze_letter, run_play, run_simulation},
    dictionary::Dictionary,
    game::{Difficulty, GameSession, RoundConfig},
    output::{print_analysis_result, print_diagnostic, print_simulation_result},
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that keeps its options open",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length
    #[arg(short, long, global = true, default_value_t = RoundConfig::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Wrong guesses allowed per round
    #[arg(short, long, global = true, default_value_t = RoundConfig::DEFAULT_GUESS_BUDGET)]
    guesses: usize,

    /// Difficulty: easy, medium or hard (default)
    #[arg(short, long, global = true, default_value = "hard")]
    difficulty: Difficulty,

    /// Path to a newline-separated word list (default: built-in dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Print the adversary's choices after every guess
    #[arg(long, global = true)]
    debug: bool,

    /// Seed for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Show how many words are still in play after every guess
        #[arg(short, long)]
        show_candidates: bool,
    },

    /// Play many automated rounds per difficulty
    Simulate {
        /// Rounds per difficulty
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Automated player: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        player: String,
    },

    /// Show how one guess splits the word pool
    Analyze {
        /// Letter to analyze
        #[arg(long)]
        letter: char,

        /// Which guess of the round this would be
        #[arg(short, long, default_value = "1")]
        turn: usize,
    },
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => Ok(Dictionary::from_file(path)?),
        None => Ok(Dictionary::embedded()),
    }
}

/// Fail with a list of usable lengths if the dictionary has none of `length`
fn check_length(dictionary: &Dictionary, length: usize) -> Result<()> {
    if dictionary.word_count_for_length(length) > 0 {
        return Ok(());
    }

    let available: Vec<String> = dictionary
        .lengths()
        .iter()
        .map(|(len, count)| format!("{len} ({count} words)"))
        .collect();
    bail!(
        "No words of length {length}. Available lengths: {}",
        available.join(", ")
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    check_length(&dictionary, cli.length)?;

    let config = RoundConfig::new(cli.length, cli.guesses, cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        show_candidates: false,
    });

    match command {
        Commands::Play { show_candidates } => {
            run_play_command(&dictionary, &config, show_candidates, cli.debug, cli.seed)
        }
        Commands::Simulate { rounds, player } => {
            run_simulate_command(&dictionary, &config, rounds, &player, cli.seed)
        }
        Commands::Analyze { letter, turn } => {
            let result = analyze_letter(&dictionary, cli.length, letter, turn)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: &RoundConfig,
    show_candidates: bool,
    debug: bool,
    seed: Option<u64>,
) -> Result<()> {
    config.validate(dictionary)?;

    let mut session = match seed {
        Some(seed) => GameSession::seeded(dictionary, seed),
        None => GameSession::new(dictionary),
    };
    if debug {
        session = session.with_diagnostics(print_diagnostic);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_play(&mut session, config, show_candidates, &mut input, &mut output)
}

fn run_simulate_command(
    dictionary: &Dictionary,
    config: &RoundConfig,
    rounds: usize,
    player: &str,
    seed: Option<u64>,
) -> Result<()> {
    config.validate(dictionary)?;

    let result = run_simulation(
        dictionary,
        SimulationConfig {
            rounds,
            word_length: config.word_length,
            guess_budget: config.guess_budget,
            player: Player::from_name(player),
            seed: seed.unwrap_or_else(rand::random),
        },
    )?;
    print_simulation_result(&result);
    Ok(())
}
