//! Partitioning candidates by the pattern a guess would reveal
//!
//! Given the current board and a guessed letter, every candidate induces
//! exactly one pattern. Candidates sharing a pattern form a class; the classes
//! are then ranked from hardest (most surviving words) to easiest.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Candidates that would all leave the board showing `pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternClass {
    pub pattern: Pattern,
    pub members: Vec<Word>,
}

impl PatternClass {
    /// Number of words in the class
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Group candidates by induced pattern
///
/// Every candidate lands in exactly one class and members keep their
/// original relative order. Class order is unspecified; see [`rank`].
#[must_use]
pub fn group_by_pattern(
    candidates: impl IntoIterator<Item = Word>,
    board: &Pattern,
    guess: u8,
) -> Vec<PatternClass> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        let pattern = board.induced(&candidate, guess);
        groups.entry(pattern).or_default().push(candidate);
    }

    groups
        .into_iter()
        .map(|(pattern, members)| PatternClass { pattern, members })
        .collect()
}

/// Total order over classes, hardest first
///
/// 1. Larger classes first
/// 2. Then patterns revealing fewer positions
/// 3. Then the pattern string itself
#[must_use]
pub fn hardest_first(a: &PatternClass, b: &PatternClass) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.pattern.revealed_count().cmp(&b.pattern.revealed_count()))
        .then_with(|| a.pattern.cmp(&b.pattern))
}

/// Partition candidates and rank the classes hardest first
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::game::partition::rank;
///
/// let words = ["big", "pig", "dig", "cat"].map(|w| Word::new(w).unwrap());
/// let classes = rank(words, &Pattern::hidden(3), b'i');
///
/// assert_eq!(classes[0].pattern.to_string(), "-i-");
/// assert_eq!(classes[0].size(), 3);
/// assert_eq!(classes[1].pattern.to_string(), "---");
/// ```
#[must_use]
pub fn rank(
    candidates: impl IntoIterator<Item = Word>,
    board: &Pattern,
    guess: u8,
) -> Vec<PatternClass> {
    let mut classes = group_by_pattern(candidates, board, guess);
    classes.sort_unstable_by(hardest_first);
    classes
}

/// Class sizes keyed by pattern string, in string order
#[must_use]
pub fn class_sizes(classes: &[PatternClass]) -> BTreeMap<String, usize> {
    classes
        .iter()
        .map(|class| (class.pattern.to_string(), class.size()))
        .collect()
}
