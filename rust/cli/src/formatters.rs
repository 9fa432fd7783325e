//! Card formatters for terminal display.
//!
//! Pure functions turning cards into the short strings shown at the
//! prompts ("A♠", "10♥"). Unicode suit symbols are used where the terminal
//! supports them, with single-letter ASCII fallback otherwise.

use hilo_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
///
/// Unicode: ♥ ♦ ♣ ♠ — ASCII: h d c s
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as its display abbreviation (A, 2-10, J, Q, K).
///
/// Ten is rendered as "10", matching the game's record codes.
pub fn format_rank(rank: &Rank) -> String {
    rank.code().to_string()
}

/// Format a Card as rank abbreviation plus suit symbol, e.g. "A♠" or "10♥".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}
