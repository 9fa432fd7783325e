//! Input parsing and validation for interactive commands.
//!
//! Every interactive prompt offers a small set of canonical choices. A
//! response is accepted when it matches a choice's full word or its first
//! letter, case-insensitively; anything else is rejected and the prompt is
//! repeated.

use hilo_engine::session::{Decision, Guess};

/// Result of parsing one line of interactive input.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T> {
    /// A canonical choice was selected
    Choice(T),
    /// User entered the quit command (q or quit)
    Quit,
    /// Input matched no alias; contains the message to show before re-prompting
    Invalid(String),
}

/// Matches input against a choice table of (word, value) pairs.
///
/// A choice is selected by its full word or its first letter, matched
/// case-insensitively. `None` means nothing matched, including partial
/// words like "sto" for "stop".
pub fn match_choice<T: Copy>(input: &str, choices: &[(&str, T)]) -> Option<T> {
    let normalized = input.trim().to_lowercase();
    for (word, value) in choices {
        if normalized == *word || normalized == word[..1] {
            return Some(*value);
        }
    }
    None
}

/// Builds the prompt fragment listing the choices, e.g. "lower(l) or higher(h)".
pub fn describe_choices<T>(choices: &[(&str, T)]) -> String {
    choices
        .iter()
        .map(|(word, _)| format!("{}({})", word, &word[..1]))
        .collect::<Vec<_>>()
        .join(" or ")
}

const GUESS_CHOICES: [(&str, Guess); 2] = [("lower", Guess::Lower), ("higher", Guess::Higher)];
const DECISION_CHOICES: [(&str, Decision); 2] =
    [("continue", Decision::Continue), ("stop", Decision::Stop)];

fn parse_with<T: Copy>(input: &str, choices: &[(&str, T)]) -> ParseResult<T> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }
    match match_choice(trimmed, choices) {
        Some(v) => ParseResult::Choice(v),
        None => ParseResult::Invalid(format!(
            "Invalid input '{}', type {}",
            trimmed,
            describe_choices(choices)
        )),
    }
}

/// Parses a higher/lower prediction ("lower"/"l", "higher"/"h").
pub fn parse_guess(input: &str) -> ParseResult<Guess> {
    parse_with(input, &GUESS_CHOICES)
}

/// Parses a continue/stop decision ("continue"/"c", "stop"/"s").
pub fn parse_decision(input: &str) -> ParseResult<Decision> {
    parse_with(input, &DECISION_CHOICES)
}

/// Prompt fragment for the guess question.
pub fn guess_choices_text() -> String {
    describe_choices(&GUESS_CHOICES)
}

/// Prompt fragment for the continue/stop question.
pub fn decision_choices_text() -> String {
    describe_choices(&DECISION_CHOICES)
}
