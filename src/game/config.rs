//! Round parameters

use super::{Difficulty, GameError};
use crate::dictionary::Dictionary;

/// Parameters fixed for the lifetime of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub guess_budget: usize,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_GUESS_BUDGET: usize = 25;

    #[must_use]
    pub const fn new(word_length: usize, guess_budget: usize, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            guess_budget,
            difficulty,
        }
    }

    /// Check the round can be played against `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroGuessBudget` if no wrong guesses are allowed and
    /// `GameError::NoWordsOfLength` if the dictionary has no word of the length.
    pub fn validate(&self, dictionary: &Dictionary) -> Result<(), GameError> {
        if self.guess_budget == 0 {
            return Err(GameError::ZeroGuessBudget);
        }
        if dictionary.word_count_for_length(self.word_length) == 0 {
            return Err(GameError::NoWordsOfLength(self.word_length));
        }
        Ok(())
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WORD_LENGTH,
            Self::DEFAULT_GUESS_BUDGET,
            Difficulty::default(),
        )
    }
}
