//! The adversarial game session
//!
//! A session never commits to a secret word. Each guess partitions the live
//! candidates by the pattern they would reveal and keeps one class, chosen by
//! the round's difficulty. The caller only ever sees a pattern and a budget
//! consistent with every guess so far.

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::partition::{self, PatternClass};
use super::{Difficulty, GameError, RoundConfig};
use crate::core::{Pattern, Word};
use crate::dictionary::Dictionary;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// `prep_for_round` has not been called yet
    NotStarted,
    InProgress,
    /// Every position is revealed
    Won,
    /// The wrong-guess budget is used up
    Lost,
}

/// Live state of one round
#[derive(Debug, Clone, Default)]
struct Round {
    word_length: usize,
    guess_budget: usize,
    difficulty: Difficulty,
    candidates: Vec<Word>,
    pattern: Pattern,
    guessed: BTreeSet<u8>,
}

impl Round {
    fn is_started(&self) -> bool {
        self.word_length > 0
    }
}

/// One game of evil hangman against a shared dictionary
///
/// A session is driven from a single thread: every mutating call takes
/// `&mut self`. Run concurrent games with one session each; the dictionary
/// they borrow is never mutated and can be shared freely.
///
/// `R` is the randomness used by [`resolve_secret_word`](Self::resolve_secret_word)
/// when several candidates are still alive. Nothing else is random.
pub struct GameSession<'a, R: Rng = StdRng> {
    dictionary: &'a Dictionary,
    rng: R,
    diagnostics: Option<Box<dyn DiagnosticSink + 'a>>,
    round: Round,
}

impl<'a> GameSession<'a, StdRng> {
    /// Create a session seeded from the operating system
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create a session with reproducible secret-word resolution
    #[must_use]
    pub fn seeded(dictionary: &'a Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Create a session using `rng` for secret-word resolution
    #[must_use]
    pub fn with_rng(dictionary: &'a Dictionary, rng: R) -> Self {
        Self {
            dictionary,
            rng,
            diagnostics: None,
            round: Round::default(),
        }
    }

    /// Install a sink that is told which class each guess kept and why
    #[must_use]
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'a) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    /// Number of dictionary words with exactly `length` letters
    #[must_use]
    pub fn word_count_for_length(&self, length: usize) -> usize {
        self.dictionary.word_count_for_length(length)
    }

    /// Start a fresh round, discarding any previous one
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroGuessBudget` or `GameError::NoWordsOfLength` if
    /// the round could not be played; the previous round is then kept.
    pub fn prep_for_round(
        &mut self,
        word_length: usize,
        guess_budget: usize,
        difficulty: Difficulty,
    ) -> Result<(), GameError> {
        self.start_round(&RoundConfig::new(word_length, guess_budget, difficulty))
    }

    /// Start a fresh round from a [`RoundConfig`]
    ///
    /// # Errors
    ///
    /// Same as [`prep_for_round`](Self::prep_for_round).
    pub fn start_round(&mut self, config: &RoundConfig) -> Result<(), GameError> {
        config.validate(self.dictionary)?;

        self.round = Round {
            word_length: config.word_length,
            guess_budget: config.guess_budget,
            difficulty: config.difficulty,
            candidates: self
                .dictionary
                .words_of_length(config.word_length)
                .cloned()
                .collect(),
            pattern: Pattern::hidden(config.word_length),
            guessed: BTreeSet::new(),
        };
        Ok(())
    }

    /// Wrong guesses the player may still make
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.round.guess_budget
    }

    /// Number of words still consistent with every guess
    #[must_use]
    pub fn live_candidate_count(&self) -> usize {
        self.round.candidates.len()
    }

    /// Words still consistent with every guess, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.round.candidates
    }

    /// The board as the player sees it
    #[must_use]
    pub fn current_pattern(&self) -> &Pattern {
        &self.round.pattern
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.round.word_length
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.round.difficulty
    }

    /// Letters guessed this round, alphabetical
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        self.round.guessed.iter().copied().map(char::from).collect()
    }

    /// Letters guessed this round, formatted like `[a, e, t]`
    #[must_use]
    pub fn guessed_letters_display(&self) -> String {
        let letters: Vec<String> = self
            .round
            .guessed
            .iter()
            .map(|&b| char::from(b).to_string())
            .collect();
        format!("[{}]", letters.join(", "))
    }

    /// Whether `letter` was guessed this round; `'a'` and `'A'` are distinct
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        letter_byte(letter).is_ok_and(|b| self.round.guessed.contains(&b))
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if !self.round.is_started() {
            RoundStatus::NotStarted
        } else if self.round.pattern.is_complete() {
            RoundStatus::Won
        } else if self.round.guess_budget == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Resolve a guessed letter against the live candidates
    ///
    /// Partitions the candidates by the pattern `letter` would reveal, keeps one
    /// class according to the difficulty, reveals its positions (or spends one
    /// wrong guess if the letter is absent from it) and records the guess.
    ///
    /// Returns the size of every class the guess produced, keyed by pattern.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidLetter` if `letter` is not an ASCII letter
    /// - `GameError::NoActiveRound` if no round was prepared
    /// - `GameError::AlreadyGuessed` if `letter` was guessed before this round
    ///
    /// On error the session is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::dictionary::Dictionary;
    /// use evil_hangman::game::{Difficulty, GameSession};
    ///
    /// let words = ["big", "pig", "dig", "cat"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// let mut session = GameSession::seeded(&dictionary, 7);
    /// session.prep_for_round(3, 5, Difficulty::Hard).unwrap();
    ///
    /// let sizes = session.apply_guess('i').unwrap();
    /// assert_eq!(sizes["-i-"], 3);
    /// assert_eq!(sizes["---"], 1);
    /// assert_eq!(session.current_pattern().to_string(), "-i-");
    /// assert_eq!(session.remaining_guesses(), 5);
    /// ```
    pub fn apply_guess(&mut self, letter: char) -> Result<BTreeMap<String, usize>, GameError> {
        let guess = letter_byte(letter)?;
        if !self.round.is_started() {
            return Err(GameError::NoActiveRound);
        }
        if self.round.guessed.contains(&guess) {
            return Err(GameError::AlreadyGuessed(char::from(guess)));
        }
        if self.round.candidates.is_empty() {
            return Err(GameError::EmptyCandidateSet);
        }

        self.round.guessed.insert(guess);

        let candidates = std::mem::take(&mut self.round.candidates);
        let mut classes = partition::rank(candidates, &self.round.pattern, guess);
        let class_sizes = partition::class_sizes(&classes);
        let class_count = classes.len();

        let (index, reason) = self
            .round
            .difficulty
            .select(self.round.guessed.len(), class_count);
        let PatternClass { pattern, members } = classes.swap_remove(index);

        if pattern.reveals(guess) {
            self.round.pattern = pattern;
        } else {
            self.round.guess_budget = self.round.guess_budget.saturating_sub(1);
        }
        self.round.candidates = members;

        if let Some(sink) = self.diagnostics.as_mut() {
            sink.record(&Diagnostic {
                guess: char::from(guess),
                difficulty: self.round.difficulty,
                reason,
                class_count,
                pattern: self.round.pattern.clone(),
                family_size: self.round.candidates.len(),
            });
        }

        Ok(class_sizes)
    }

    /// The word the session "was thinking of"
    ///
    /// With a single candidate left this is always that word. Otherwise one
    /// candidate is drawn at random on every call, so call it once per round
    /// if the answer must stay stable. Round state is not touched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCandidateSet` if no candidates remain (for
    /// example when no round was prepared).
    pub fn resolve_secret_word(&mut self) -> Result<Word, GameError> {
        match self.round.candidates.as_slice() {
            [] => Err(GameError::EmptyCandidateSet),
            [only] => Ok(only.clone()),
            many => many
                .choose(&mut self.rng)
                .cloned()
                .ok_or(GameError::EmptyCandidateSet),
        }
    }
}

/// ASCII byte for a guessed letter, case kept as given
fn letter_byte(letter: char) -> Result<u8, GameError> {
    if letter.is_ascii_alphabetic() {
        Ok(letter as u8)
    } else {
        Err(GameError::InvalidLetter(letter))
    }
}
