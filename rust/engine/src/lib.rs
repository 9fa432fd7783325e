//! # hilo-engine: Higher/Lower Wagering Game Core
//!
//! The session and match state machine for a single-player higher/lower
//! card wagering game: the player guesses whether their card ranks above or
//! below the house card, staking an escalating reward across consecutive
//! correct guesses, at a fixed entry cost per match, until their score
//! crosses a win or loss threshold.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and record codes
//! - [`deck`] - Draw-and-return deck with deterministic ChaCha20 shuffling
//! - [`compare`] - Rank-table comparison of player vs house cards
//! - [`session`] - Session engine: rounds, matches, scoring, termination
//! - [`strategy`] - Automated decision sources for simulation and tests
//! - [`logger`] - Match record serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hilo_engine::deck::Deck;
//! use hilo_engine::session::{Rules, SessionEngine};
//! use hilo_engine::strategy::ThresholdStrategy;
//!
//! let mut deck = Deck::new_with_seed(42);
//! deck.shuffle();
//! let mut engine = SessionEngine::new(deck, Rules::default());
//! let mut strategy = ThresholdStrategy::default();
//! let summary = engine
//!     .run_session(&mut strategy)
//!     .expect("automated session cannot run out of input");
//! println!("Session ended {:?} at {}", summary.outcome, summary.final_score);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All draws are reproducible using seeded RNG:
//!
//! ```rust
//! use hilo_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```
//!
//! ## Rank Table
//!
//! Comparison uses a fixed total ordering with Ace low:
//! `Ace=1 < 2 < … < 10 < Jack=11 < Queen=12 < King=13`. Suit never
//! participates in comparison.
//!
//! ```rust
//! use hilo_engine::cards::{Card, Rank, Suit};
//! use hilo_engine::compare::{compare, RoundOutcome};
//!
//! let player = Card { suit: Suit::Hearts, rank: Rank::Three };
//! let house = Card { suit: Suit::Hearts, rank: Rank::King };
//! assert_eq!(compare(player, house), RoundOutcome::Lower);
//! ```

pub mod cards;
pub mod compare;
pub mod deck;
pub mod errors;
pub mod logger;
pub mod session;
pub mod strategy;
