//! Errors raised by a game session

use std::fmt;

/// A broken precondition of a [`GameSession`](super::GameSession) call
///
/// None of these are transient: they signal a caller bug, and the call that
/// returned one left the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The letter was already guessed this round
    AlreadyGuessed(char),
    /// The guess is not an ASCII letter
    InvalidLetter(char),
    /// No candidate words remain to choose a secret word from
    EmptyCandidateSet,
    /// A guess was made before any round was prepared
    NoActiveRound,
    /// The dictionary has no words of the requested length
    NoWordsOfLength(usize),
    /// A round needs at least one allowed wrong guess
    ZeroGuessBudget,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyGuessed(letter) => write!(f, "Letter '{letter}' was already guessed"),
            Self::InvalidLetter(letter) => {
                write!(f, "'{letter}' is not a letter (expected a-z)")
            }
            Self::EmptyCandidateSet => write!(f, "No candidate words remain"),
            Self::NoActiveRound => write!(f, "No round in progress, prepare a round first"),
            Self::NoWordsOfLength(len) => write!(f, "Dictionary has no words of length {len}"),
            Self::ZeroGuessBudget => write!(f, "Number of wrong guesses must be at least 1"),
        }
    }
}

impl std::error::Error for GameError {}
