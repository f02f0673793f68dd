//! Evil Hangman
//!
//! Hangman where the computer never commits to a secret word. Each guess
//! splits the remaining candidates by the pattern it would reveal, and the
//! adversary keeps whichever class leaves the player worst off.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::dictionary::Dictionary;
//! use evil_hangman::game::{Difficulty, GameSession};
//!
//! let dictionary = Dictionary::embedded();
//! let mut session = GameSession::seeded(&dictionary, 42);
//! session.prep_for_round(5, 10, Difficulty::Hard).unwrap();
//!
//! let classes = session.apply_guess('e').unwrap();
//! println!("{} classes, board is now {}", classes.len(), session.current_pattern());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Adversarial game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
