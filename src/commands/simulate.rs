//! Simulation command
//!
//! Plays many rounds with an automated player against every difficulty and
//! collects win statistics. Rounds run in parallel; each owns its session.

use crate::dictionary::Dictionary;
use crate::game::{Difficulty, GameError, GameSession, RoundConfig, RoundStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// How the automated player picks its next letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Most common unguessed letter among the live candidates
    Frequency,
    /// Any unguessed letter, uniformly
    Random,
}

impl Player {
    /// Create player from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Frequency,
        }
    }

    /// Pick the next letter from `alphabet`, or `None` once all of it is used
    ///
    /// Frequency ties are broken at random so repeated rounds differ.
    pub fn next_letter<R: Rng, G: Rng>(
        self,
        session: &GameSession<'_, R>,
        alphabet: &[char],
        rng: &mut G,
    ) -> Option<char> {
        let unguessed: Vec<char> = alphabet
            .iter()
            .copied()
            .filter(|&c| !session.has_guessed(c))
            .collect();

        match self {
            Self::Random => unguessed.choose(rng).copied(),
            Self::Frequency => {
                let counts: Vec<(char, usize)> = unguessed
                    .iter()
                    .map(|&c| {
                        let count = session
                            .candidates()
                            .iter()
                            .filter(|w| w.has_letter(c as u8))
                            .count();
                        (c, count)
                    })
                    .collect();
                let best = counts.iter().map(|&(_, n)| n).max()?;
                let tied: Vec<char> = counts
                    .into_iter()
                    .filter_map(|(c, n)| (n == best).then_some(c))
                    .collect();
                tied.choose(rng).copied()
            }
        }
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub word_length: usize,
    pub guess_budget: usize,
    pub player: Player,
    pub seed: u64,
}

/// Outcome of one automated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub difficulty: Difficulty,
    pub won: bool,
    pub wrong_guesses: usize,
    pub letters_guessed: usize,
    pub secret_word: String,
}

/// Aggregated results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultyStatistics {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub average_wrong_guesses: f64,
    pub average_letters: f64,
}

impl DifficultyStatistics {
    /// Fraction of rounds won, 0.0 when no rounds were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub config: SimulationConfig,
    pub statistics: Vec<DifficultyStatistics>,
    pub duration: Duration,
}

/// Play one round to completion
///
/// # Errors
///
/// Returns an error if the round cannot be started.
pub fn play_round(
    dictionary: &Dictionary,
    config: &RoundConfig,
    player: Player,
    seed: u64,
) -> Result<RoundResult, GameError> {
    let mut session = GameSession::seeded(dictionary, seed);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    session.start_round(config)?;

    // The player knows which letters the word list uses, not which words are live
    let alphabet: Vec<char> = session
        .candidates()
        .iter()
        .flat_map(|w| w.letters().iter().map(|&b| char::from(b)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    while session.status() == RoundStatus::InProgress {
        let Some(letter) = player.next_letter(&session, &alphabet, &mut rng) else {
            break;
        };
        session.apply_guess(letter)?;
    }

    Ok(RoundResult {
        difficulty: config.difficulty,
        won: session.status() == RoundStatus::Won,
        wrong_guesses: config.guess_budget - session.remaining_guesses(),
        letters_guessed: session.guessed_letters().len(),
        secret_word: session.resolve_secret_word()?.text().to_string(),
    })
}

/// Run `config.rounds` rounds per difficulty
///
/// # Errors
///
/// Returns an error if the dictionary cannot supply rounds of the configured
/// length and budget.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: SimulationConfig,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let jobs: Vec<(Difficulty, u64)> = Difficulty::ALL
        .iter()
        .flat_map(|&difficulty| (0..config.rounds as u64).map(move |i| (difficulty, i)))
        .collect();

    println!("🎯 Simulating {} rounds...", jobs.len());

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let results: Vec<RoundResult> = jobs
        .par_iter()
        .map(|&(difficulty, i)| {
            let round = RoundConfig::new(config.word_length, config.guess_budget, difficulty);
            let result = play_round(dictionary, &round, config.player, config.seed.wrapping_add(i));
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    let statistics = Difficulty::ALL
        .iter()
        .map(|&difficulty| summarize(difficulty, &results))
        .collect();

    Ok(SimulationResult {
        config,
        statistics,
        duration: start.elapsed(),
    })
}

fn summarize(difficulty: Difficulty, results: &[RoundResult]) -> DifficultyStatistics {
    let rounds: Vec<&RoundResult> = results
        .iter()
        .filter(|r| r.difficulty == difficulty)
        .collect();
    let count = rounds.len();
    let average = |total: usize| {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    };

    DifficultyStatistics {
        difficulty,
        rounds: count,
        wins: rounds.iter().filter(|r| r.won).count(),
        average_wrong_guesses: average(rounds.iter().map(|r| r.wrong_guesses).sum()),
        average_letters: average(rounds.iter().map(|r| r.letters_guessed).sum()),
    }
}
