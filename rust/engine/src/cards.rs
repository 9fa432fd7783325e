use crate::errors::CardError;
use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
/// Suit never influences rank comparison; it only matters for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Single-letter code used in match records ("C", "D", "H", "S").
    pub fn code(&self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    /// Parses a single-letter suit code, case-insensitively.
    ///
    /// Anything outside the four fixed codes is a data-integrity failure
    /// and must be reported, never defaulted.
    pub fn from_code(code: &str) -> Result<Suit, CardError> {
        match code.to_ascii_uppercase().as_str() {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(CardError::UnknownSuit(code.to_string())),
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Numeric values follow the game's fixed rank table: Ace is lowest (1),
/// King is highest (13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, lowest)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13, highest)
    King,
}

impl Rank {
    /// The rank-table integer (1 for Ace through 13 for King).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Abbreviated code used in match records ("A", "2".."10", "J", "Q", "K").
    pub fn code(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parses an abbreviated rank code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Rank, CardError> {
        match code.to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(CardError::UnknownRank(code.to_string())),
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are produced by the [`crate::deck::Deck`] and read (never mutated)
/// by the comparator and the session engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    /// Compact record code: rank code followed by suit code, e.g. "AS", "10H".
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }

    /// Parses a compact card code back into a [`Card`].
    ///
    /// The suit is always the final character; everything before it is the
    /// rank code. Malformed codes fail with [`CardError`] so corrupted
    /// records surface loudly instead of decoding to a wrong card.
    pub fn from_code(code: &str) -> Result<Card, CardError> {
        let trimmed = code.trim();
        if trimmed.len() < 2 || !trimmed.is_char_boundary(trimmed.len() - 1) {
            return Err(CardError::UnknownRank(trimmed.to_string()));
        }
        let (rank_part, suit_part) = trimmed.split_at(trimmed.len() - 1);
        Ok(Card {
            rank: Rank::from_code(rank_part)?,
            suit: Suit::from_code(suit_part)?,
        })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
