//! Interactive CLI mode
//!
//! Line-based game loop: read a letter, resolve it, redraw the board.

use crate::game::{GameSession, RoundConfig, RoundStatus};
use crate::output::formatters::{budget_bar, spaced_pattern};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

/// What the player typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Letter(char),
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit") {
        return Input::Quit;
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Input::Letter(c),
        _ => Input::Invalid,
    }
}

/// Letters used by the words in play
fn alphabet<R: Rng>(session: &GameSession<'_, R>) -> BTreeSet<char> {
    session
        .candidates()
        .iter()
        .flat_map(|w| w.letters().iter().map(|&b| char::from(b)))
        .collect()
}

/// Flip `letter` to the other case if only that case occurs in the word list
///
/// Lets a player type `e` against an uppercase list (or `E` against a
/// lowercase one). Mixed-case lists get the letter exactly as typed.
fn match_case(letter: char, alphabet: &BTreeSet<char>) -> char {
    let flipped = if letter.is_ascii_lowercase() {
        letter.to_ascii_uppercase()
    } else {
        letter.to_ascii_lowercase()
    };

    if !alphabet.contains(&letter) && alphabet.contains(&flipped) {
        flipped
    } else {
        letter
    }
}

/// Run the interactive game until the player quits or declines a rematch
///
/// `show_candidates` prints the live candidate count next to the board.
///
/// # Errors
///
/// Returns an error on I/O failure or if the round cannot be started with `config`.
pub fn run_play<R, I, O>(
    session: &mut GameSession<'_, R>,
    config: &RoundConfig,
    show_candidates: bool,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Evil Hangman                             ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "I'm thinking of a {}-letter word. Guess one letter at a time.",
        config.word_length
    )?;
    writeln!(output, "Type 'quit' to give up.\n")?;

    loop {
        session.start_round(config)?;

        if !play_round(session, config, show_candidates, input, output)? {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let answer = prompt(input, output, "Play again? (yes/no)")?.map(|a| a.to_lowercase());
        if !matches!(answer.as_deref(), Some("yes" | "y")) {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
        writeln!(output, "\n🔄 New game started!\n")?;
    }
}

/// Play one round; returns false if the player quit or input ended
fn play_round<R, I, O>(
    session: &mut GameSession<'_, R>,
    config: &RoundConfig,
    show_candidates: bool,
    input: &mut I,
    output: &mut O,
) -> Result<bool>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let alphabet = alphabet(session);

    while session.status() == RoundStatus::InProgress {
        writeln!(output, "────────────────────────────────────────────────────────────")?;
        writeln!(
            output,
            "Word:    {}",
            spaced_pattern(session.current_pattern()).bright_white().bold()
        )?;
        writeln!(
            output,
            "Guesses: {} {} left",
            budget_bar(session.remaining_guesses(), config.guess_budget, 20),
            session.remaining_guesses()
        )?;
        writeln!(output, "Used:    {}", session.guessed_letters_display())?;
        if show_candidates {
            writeln!(
                output,
                "Live:    {} candidate words",
                session.live_candidate_count()
            )?;
        }

        let Some(line) = prompt(input, output, "Your guess")? else {
            return Ok(false);
        };

        let letter = match parse_input(&line) {
            Input::Quit => return Ok(false),
            Input::Invalid => {
                writeln!(output, "❌ Enter a single letter a-z\n")?;
                continue;
            }
            Input::Letter(letter) => match_case(letter, &alphabet),
        };

        if session.has_guessed(letter) {
            writeln!(output, "You already guessed '{letter}'\n")?;
            continue;
        }

        let budget_before = session.remaining_guesses();
        session.apply_guess(letter)?;

        if session.remaining_guesses() < budget_before {
            writeln!(output, "{}\n", format!("Sorry, there is no '{letter}'").red())?;
        } else {
            let count = session
                .current_pattern()
                .symbols()
                .iter()
                .filter(|&&b| char::from(b) == letter)
                .count();
            let noun = if count == 1 { "is" } else { "are" };
            writeln!(
                output,
                "{}\n",
                format!("Yes, there {noun} {count} '{letter}'").green()
            )?;
        }
    }

    let secret = session.resolve_secret_word()?;
    if session.status() == RoundStatus::Won {
        writeln!(output, "{}", "    🎉  You beat me!  🎉    ".bright_green().bold())?;
    } else {
        writeln!(output, "{}", "    💀  You lose!  💀    ".bright_red().bold())?;
    }
    writeln!(output, "The word was {}\n", secret.text().bold())?;

    Ok(true)
}

/// Get user input with a prompt; `None` at end of input
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::dictionary::loader::words_from_slice;
    use crate::game::Difficulty;
    use std::io::Cursor;

    const PIGS: &[&str] = &["big", "pig", "dig", "cat"];

    fn run(words: &[&str], script: &str, config: &RoundConfig, show_candidates: bool) -> String {
        colored::control::set_override(false);
        let dictionary = Dictionary::new(words_from_slice(words)).unwrap();
        let mut session = GameSession::seeded(&dictionary, 3);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();

        run_play(&mut session, config, show_candidates, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn play_with(words: &[&str], script: &str, config: &RoundConfig) -> String {
        run(words, script, config, false)
    }

    fn play(script: &str, config: &RoundConfig) -> String {
        play_with(PIGS, script, config)
    }

    #[test]
    fn candidate_count_only_when_asked() {
        let config = RoundConfig::new(3, 5, Difficulty::Hard);

        let hidden = run(PIGS, "quit\n", &config, false);
        assert!(!hidden.contains("candidate words"));

        let shown = run(PIGS, "i\nquit\n", &config, true);
        assert!(shown.contains("Live:    4 candidate words"));
        assert!(shown.contains("Live:    3 candidate words"));
    }

    #[test]
    fn parse_input_accepts_single_letters() {
        assert_eq!(parse_input(" E \n"), Input::Letter('E'));
        assert_eq!(parse_input("QUIT"), Input::Quit);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input("ab"), Input::Invalid);
        assert_eq!(parse_input("7"), Input::Invalid);
        assert_eq!(parse_input(""), Input::Invalid);
    }

    #[test]
    fn winning_round() {
        let config = RoundConfig::new(3, 5, Difficulty::Hard);
        let text = play("i\nb\np\nd\ng\nno\n", &config);

        assert!(text.contains("Yes, there is 1 'i'"));
        assert!(text.contains("Sorry, there is no 'b'"));
        assert!(text.contains("You beat me!"));
        assert!(text.contains("The word was dig"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn letters_follow_the_word_list_case() {
        let lower: BTreeSet<char> = "bigpdcat".chars().collect();
        assert_eq!(match_case('I', &lower), 'i');
        assert_eq!(match_case('i', &lower), 'i');

        let upper: BTreeSet<char> = "BIG".chars().collect();
        assert_eq!(match_case('g', &upper), 'G');

        let mixed: BTreeSet<char> = "Gg".chars().collect();
        assert_eq!(match_case('G', &mixed), 'G');
        assert_eq!(match_case('z', &mixed), 'z');
    }

    #[test]
    fn uppercase_word_list_keeps_its_spelling() {
        let config = RoundConfig::new(3, 5, Difficulty::Hard);
        let text = play_with(&["BIG", "PIG", "DIG", "CAT"], "i\nB\np\nd\ng\nno\n", &config);

        assert!(text.contains("Yes, there is 1 'I'"));
        assert!(text.contains("Sorry, there is no 'B'"));
        assert!(text.contains("The word was DIG"));
    }

    #[test]
    fn losing_round() {
        let config = RoundConfig::new(3, 2, Difficulty::Hard);
        let text = play("x\nz\nno\n", &config);

        assert!(text.contains("You lose!"));
        assert!(text.contains("The word was"));
    }

    #[test]
    fn repeated_and_invalid_guesses_are_refused() {
        let config = RoundConfig::new(3, 5, Difficulty::Hard);
        let text = play("i\ni\n42\nquit\n", &config);

        assert!(text.contains("You already guessed 'i'"));
        assert!(text.contains("Enter a single letter a-z"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let config = RoundConfig::new(3, 5, Difficulty::Hard);
        let text = play("i\n", &config);
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn rematch_starts_new_round() {
        let config = RoundConfig::new(3, 1, Difficulty::Hard);
        let text = play("z\nyes\nz\nno\n", &config);

        assert_eq!(text.matches("You lose!").count(), 2);
        assert!(text.contains("New game started"));
    }
}
