//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Space out a pattern so hidden positions are easy to count, e.g. `- i -`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .symbols()
        .iter()
        .map(|&b| char::from(b).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining guesses out of the round budget as a bar
#[must_use]
pub fn budget_bar(remaining: usize, total: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, total as f64, width)
}

/// Format a fraction as a percentage, e.g. `42.5%`
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_separates_symbols() {
        let pattern: Pattern = "-i-".parse().unwrap();
        assert_eq!(spaced_pattern(&pattern), "- i -");
        assert_eq!(spaced_pattern(&Pattern::hidden(1)), "-");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn budget_bar_handles_zero_budget() {
        assert_eq!(budget_bar(0, 0, 4), "░░░░");
        assert_eq!(budget_bar(3, 6, 4), "██░░");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent(0.425), "42.5%");
        assert_eq!(percent(1.0), "100.0%");
    }
}
