//! Optional side channel describing the adversary's choices
//!
//! A session with no sink installed behaves identically to one with a sink;
//! sinks only observe.

use super::difficulty::{Difficulty, SelectionReason};
use crate::core::Pattern;
use std::fmt;

/// What happened while resolving one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub guess: char,
    pub difficulty: Difficulty,
    pub reason: SelectionReason,
    /// Number of classes the guess produced
    pub class_count: usize,
    /// Pattern of the class that was kept
    pub pattern: Pattern,
    /// Number of words in the class that was kept
    pub family_size: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SelectionReason::AlwaysHardest | SelectionReason::Hardest => {
                writeln!(f, "DEBUGGING: Picking hardest list.")?;
            }
            SelectionReason::SecondHardest => {
                writeln!(f, "DEBUGGING: Difficulty second hardest pattern and list.")?;
            }
            SelectionReason::OnlyOneClass => {
                writeln!(
                    f,
                    "DEBUGGING: Should pick second hardest pattern this turn, but only one pattern available."
                )?;
                writeln!(f, "DEBUGGING: Picking hardest list.")?;
            }
        }
        write!(
            f,
            "DEBUGGING: New pattern is: {}. New family has {} words.",
            self.pattern, self.family_size
        )
    }
}

/// Receiver of [`Diagnostic`] events
///
/// Implemented for any `FnMut(&Diagnostic)` closure.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn record(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}
