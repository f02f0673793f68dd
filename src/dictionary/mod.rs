//! Dictionary of candidate words
//!
//! A `Dictionary` is built once and only read afterwards, so any number of
//! game sessions (on any number of threads) can borrow the same instance.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;

/// Error type for building a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read
    Io(io::Error),
    /// The word list contained no usable words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// An immutable set of words, kept in first-seen order
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate words
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let words = dedup(words);
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words })
    }

    /// The dictionary compiled into the binary
    ///
    /// The build script rejects an empty word list, so this cannot be empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: dedup(loader::words_from_slice(DICTIONARY)),
        }
    }

    /// Load a newline-separated word list
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in dictionary order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `length` letters, in dictionary order
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == length)
    }

    /// Count of words with exactly `length` letters
    #[must_use]
    pub fn word_count_for_length(&self, length: usize) -> usize {
        self.words_of_length(length).count()
    }

    /// Word count per available length, shortest first
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.len()).or_insert(0) += 1;
        }
        counts
    }
}

/// Drop repeated words, keeping the first occurrence of each
fn dedup(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_every_entry() {
        let dictionary = Dictionary::embedded();
        let distinct: FxHashSet<&str> = DICTIONARY.iter().copied().collect();
        assert_eq!(dictionary.len(), distinct.len());
        assert!(!dictionary.is_empty());
        assert!(dictionary.word_count_for_length(5) > 0);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let words = dedup(words_from_slice(&["pig", "big", "pig", "dig", "big"]));
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["pig", "big", "dig"]);
    }

    #[test]
    fn duplicates_are_removed_in_order() {
        let dictionary =
            Dictionary::new(words_from_slice(&["cat", "dog", "cat", "CAT", "cow", "CAT"])).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog", "CAT", "cow"]);
        assert_eq!(dictionary.word_count_for_length(3), 4);
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert!(matches!(
            Dictionary::new(Vec::new()),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn counts_by_length() {
        let dictionary =
            Dictionary::new(words_from_slice(&["big", "pig", "dig", "cat", "goat", "a"])).unwrap();

        assert_eq!(dictionary.word_count_for_length(3), 4);
        assert_eq!(dictionary.word_count_for_length(4), 1);
        assert_eq!(dictionary.word_count_for_length(7), 0);

        let lengths: Vec<(usize, usize)> = dictionary.lengths().into_iter().collect();
        assert_eq!(lengths, vec![(1, 1), (3, 4), (4, 1)]);
    }

    #[test]
    fn missing_file_reports_io_error() {
        assert!(matches!(
            Dictionary::from_file("no/such/word/list.txt"),
            Err(DictionaryError::Io(_))
        ));
    }
}
