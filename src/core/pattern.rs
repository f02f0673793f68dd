//! Revealed-letter pattern for a hangman round
//!
//! A pattern has one symbol per letter of the secret word: either the
//! hidden marker `-` or the revealed letter itself. Patterns order exactly
//! like their string form, so `-` sorts before every letter.

use super::Word;
use std::fmt;

/// The board as the player sees it, e.g. `-i-` or `b--b-e`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// Marker for a position that has not been revealed
    pub const HIDDEN: u8 = b'-';

    /// A pattern of `len` hidden positions
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self(vec![Self::HIDDEN; len])
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw symbols, `HIDDEN` for unrevealed positions
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Number of revealed (non-hidden) positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|&&b| b != Self::HIDDEN).count()
    }

    /// Number of hidden positions
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.len() - self.revealed_count()
    }

    /// True once every position is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&Self::HIDDEN)
    }

    /// Check whether `letter` is revealed anywhere
    #[must_use]
    pub fn reveals(&self, letter: u8) -> bool {
        letter != Self::HIDDEN && self.0.contains(&letter)
    }

    /// Pattern the board would show if `word` were the secret and `guess` were applied
    ///
    /// Every position where `word` has `guess` becomes `guess`; everything else
    /// keeps its current symbol. Positions of `word` past the end of the
    /// pattern are ignored, so the result always has the pattern's length.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let board = Pattern::hidden(3);
    /// let word = Word::new("pig").unwrap();
    ///
    /// assert_eq!(board.induced(&word, b'i').to_string(), "-i-");
    /// assert_eq!(board.induced(&word, b'a'), board);
    /// ```
    #[must_use]
    pub fn induced(&self, word: &Word, guess: u8) -> Self {
        let mut symbols = self.0.clone();
        for i in word.positions_of(guess) {
            if let Some(symbol) = symbols.get_mut(i) {
                *symbol = guess;
            }
        }
        Self(symbols)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a pattern such as `-i-`; letters keep their case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Option<Vec<u8>> = s
            .bytes()
            .map(|b| match b {
                Self::HIDDEN => Some(b),
                b if b.is_ascii_alphabetic() => Some(b),
                _ => None,
            })
            .collect();

        match symbols {
            Some(symbols) if !symbols.is_empty() => Ok(Self(symbols)),
            _ => Err(format!("Invalid pattern string: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn hidden_pattern_has_no_reveals() {
        let p = Pattern::hidden(4);
        assert_eq!(p.to_string(), "----");
        assert_eq!(p.len(), 4);
        assert_eq!(p.revealed_count(), 0);
        assert_eq!(p.hidden_count(), 4);
        assert!(!p.is_complete());
    }

    #[test]
    fn induced_reveals_every_occurrence() {
        let word = Word::new("banana").unwrap();
        let p = Pattern::hidden(6).induced(&word, b'a');
        assert_eq!(p.to_string(), "-a-a-a");
        assert_eq!(p.revealed_count(), 3);
    }

    #[test]
    fn induced_keeps_earlier_reveals() {
        let word = Word::new("banana").unwrap();
        let p = pattern("-a-a-a").induced(&word, b'n');
        assert_eq!(p.to_string(), "-anana");
    }

    #[test]
    fn induced_absent_letter_is_unchanged() {
        let word = Word::new("cat").unwrap();
        let board = pattern("-a-");
        assert_eq!(board.induced(&word, b'z'), board);
    }

    #[test]
    fn induced_ignores_positions_past_the_board() {
        let word = Word::new("banana").unwrap();
        let p = Pattern::hidden(3).induced(&word, b'a');
        assert_eq!(p.to_string(), "-a-");
        assert_eq!(p.len(), 3);

        let short = Word::new("an").unwrap();
        assert_eq!(Pattern::hidden(4).induced(&short, b'n').to_string(), "-n--");
    }

    #[test]
    fn reveals_checks_letters_only() {
        let p = pattern("-i-");
        assert!(p.reveals(b'i'));
        assert!(!p.reveals(b'g'));
        assert!(!p.reveals(Pattern::HIDDEN));
    }

    #[test]
    fn complete_pattern() {
        let p = pattern("dig");
        assert!(p.is_complete());
        assert_eq!(p.hidden_count(), 0);
    }

    #[test]
    fn ordering_matches_string_order() {
        let mut patterns = vec![pattern("b--"), pattern("-i-"), pattern("---"), pattern("--g")];
        patterns.sort();
        let rendered: Vec<String> = patterns.iter().map(ToString::to_string).collect();

        let mut strings = vec!["b--", "-i-", "---", "--g"];
        strings.sort_unstable();
        assert_eq!(rendered, strings);
    }

    #[test]
    fn parse_rejects_bad_symbols() {
        assert!("-_-".parse::<Pattern>().is_err());
        assert!("".parse::<Pattern>().is_err());
        assert_ne!(pattern("-I-"), pattern("-i-"));
        assert_eq!(pattern("-I-").to_string(), "-I-");
    }
}
