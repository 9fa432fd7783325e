use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of cards for the session engine. The engine only ever draws one
/// card at a time and returns both round cards before the next draw, so any
/// implementation holding 52 cards when nothing is outstanding satisfies it.
pub trait CardSource {
    /// Draws one card, removing it from the available pool.
    fn draw(&mut self) -> Result<Card, GameError>;
    /// Returns previously drawn cards to the pool and reshuffles.
    fn return_cards(&mut self, cards: &[Card]);
    /// Number of cards currently available to draw.
    fn remaining(&self) -> usize;
}

/// A standard 52-card deck with a deterministic, seedable shuffle.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    fn return_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
        self.shuffle();
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
