//! Core domain types for hangman
//!
//! Words and board patterns. Both are plain values with a total order, so
//! ranking and tie-breaking further up never depend on hashing.

mod pattern;
mod word;

pub use pattern::Pattern;
pub use word::{Word, WordError};
