//! Letter analysis command
//!
//! Shows how one guess against the full pool of a given length splits the
//! candidates, and which class each difficulty would keep.

use crate::core::{Pattern, Word};
use crate::dictionary::Dictionary;
use crate::game::partition::rank;
use crate::game::{Difficulty, GameError, SelectionReason};

/// One class of the partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSummary {
    pub pattern: Pattern,
    pub size: usize,
    /// Up to a handful of members, in dictionary order
    pub sample: Vec<String>,
}

/// The class a difficulty keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPick {
    pub difficulty: Difficulty,
    /// Index into `AnalysisResult::classes`
    pub index: usize,
    pub reason: SelectionReason,
}

/// Result of analyzing a letter
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub letter: char,
    pub word_length: usize,
    pub turn: usize,
    pub total_candidates: usize,
    /// Hardest first
    pub classes: Vec<ClassSummary>,
    pub picks: Vec<DifficultyPick>,
}

impl AnalysisResult {
    /// Share of candidates eliminated by keeping the class at `index`
    #[must_use]
    pub fn eliminated_fraction(&self, index: usize) -> f64 {
        match self.classes.get(index) {
            Some(class) if self.total_candidates > 0 => {
                1.0 - class.size as f64 / self.total_candidates as f64
            }
            _ => 0.0,
        }
    }
}

const SAMPLE_SIZE: usize = 5;

/// Partition every word of `word_length` by `letter`
///
/// `turn` is the guess number the letter would be (1 for an opening guess);
/// it decides whether easier difficulties concede.
///
/// # Errors
///
/// Returns an error if:
/// - `letter` is not an ASCII letter
/// - The dictionary has no words of `word_length`
pub fn analyze_letter(
    dictionary: &Dictionary,
    word_length: usize,
    letter: char,
    turn: usize,
) -> Result<AnalysisResult, GameError> {
    if !letter.is_ascii_alphabetic() {
        return Err(GameError::InvalidLetter(letter));
    }

    let candidates: Vec<Word> = dictionary.words_of_length(word_length).cloned().collect();
    if candidates.is_empty() {
        return Err(GameError::NoWordsOfLength(word_length));
    }
    let total_candidates = candidates.len();

    let mut classes = rank(candidates, &Pattern::hidden(word_length), letter as u8);
    for class in &mut classes {
        class.members.sort_unstable();
    }

    let picks = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let (index, reason) = difficulty.select(turn.max(1), classes.len());
            DifficultyPick {
                difficulty,
                index,
                reason,
            }
        })
        .collect();

    let classes = classes
        .into_iter()
        .map(|class| ClassSummary {
            size: class.size(),
            sample: class
                .members
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
            pattern: class.pattern,
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        word_length,
        turn: turn.max(1),
        total_candidates,
        classes,
        picks,
    })
}
