//! Evil hangman game engine
//!
//! [`GameSession`] is the whole game: round setup, guess resolution through
//! [`partition`], and the [`Difficulty`] selection policy.

mod config;
mod diagnostics;
mod difficulty;
mod error;
pub mod partition;
mod session;

pub use config::RoundConfig;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use difficulty::{Difficulty, SelectionReason};
pub use error::GameError;
pub use partition::PatternClass;
pub use session::{GameSession, RoundStatus};
