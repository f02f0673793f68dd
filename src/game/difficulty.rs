//! Difficulty tiers and the class selection policy
//!
//! The adversary normally keeps the hardest class. Easier tiers periodically
//! concede the second-hardest class instead.

use std::fmt;

/// How hard the adversary plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Concedes the second-hardest class every 2nd guess
    Easy,
    /// Concedes the second-hardest class every 4th guess
    Medium,
    /// Always keeps the hardest class
    #[default]
    Hard,
}

/// Why a particular class was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Hard difficulty never concedes
    AlwaysHardest,
    /// Not a concession turn for this difficulty
    Hardest,
    /// Concession turn: the second-hardest class was kept
    SecondHardest,
    /// Concession turn, but the guess produced a single class
    OnlyOneClass,
}

impl Difficulty {
    /// Every tier, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Create difficulty from name string
    ///
    /// Supported names: "easy", "medium", "hard" (any case).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" | "e" => Some(Self::Easy),
            "medium" | "m" => Some(Self::Medium),
            "hard" | "h" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Number of guesses between concessions, `None` if the tier never concedes
    #[must_use]
    pub const fn concession_period(self) -> Option<usize> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }

    /// Pick an index into the ranked classes (0 = hardest)
    ///
    /// `guess_count` includes the guess currently being resolved.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::game::{Difficulty, SelectionReason};
    ///
    /// assert_eq!(Difficulty::Hard.select(4, 3), (0, SelectionReason::AlwaysHardest));
    /// assert_eq!(Difficulty::Easy.select(2, 3), (1, SelectionReason::SecondHardest));
    /// assert_eq!(Difficulty::Easy.select(3, 3), (0, SelectionReason::Hardest));
    /// assert_eq!(Difficulty::Medium.select(4, 1), (0, SelectionReason::OnlyOneClass));
    /// ```
    #[must_use]
    pub fn select(self, guess_count: usize, class_count: usize) -> (usize, SelectionReason) {
        let Some(period) = self.concession_period() else {
            return (0, SelectionReason::AlwaysHardest);
        };

        if guess_count % period != 0 {
            (0, SelectionReason::Hardest)
        } else if class_count >= 2 {
            (1, SelectionReason::SecondHardest)
        } else {
            (0, SelectionReason::OnlyOneClass)
        }
    }

    /// Lowercase name, as accepted by `from_name`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("Unknown difficulty '{s}' (expected easy, medium or hard)"))
    }
}
