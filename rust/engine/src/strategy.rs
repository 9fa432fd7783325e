//! Automated decision sources: a baseline strategy for unattended
//! simulation runs, plus scripted harnesses for deterministic tests.

use std::collections::VecDeque;

use crate::cards::Card;
use crate::deck::CardSource;
use crate::errors::GameError;
use crate::session::{Decision, DecisionSource, Guess, SessionEvent};

/// Rank-table midpoint strategy: guess Higher when the house card sits in
/// the low half of the table, Lower otherwise, and stop once the pending
/// reward reaches a target.
#[derive(Debug)]
pub struct ThresholdStrategy {
    stop_target: u64,
}

impl ThresholdStrategy {
    /// `stop_target` is the pending reward at which the strategy banks.
    pub fn new(stop_target: u64) -> Self {
        Self { stop_target }
    }
}

impl Default for ThresholdStrategy {
    fn default() -> Self {
        // bank after two doublings of the base reward
        Self::new(80)
    }
}

impl DecisionSource for ThresholdStrategy {
    fn guess(&mut self, house: Card) -> Result<Guess, GameError> {
        if house.rank.value() <= 6 {
            Ok(Guess::Higher)
        } else {
            Ok(Guess::Lower)
        }
    }

    fn continue_or_stop(&mut self, pending_reward: u64) -> Result<Decision, GameError> {
        if pending_reward >= self.stop_target {
            Ok(Decision::Stop)
        } else {
            Ok(Decision::Continue)
        }
    }
}

/// Decision source replaying a fixed script. Fails with
/// [`GameError::InputClosed`] once its script runs out, which ends the
/// session the same way a closed stdin would. Events received while the
/// script runs are kept for inspection.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    guesses: VecDeque<Guess>,
    decisions: VecDeque<Decision>,
    events: Vec<SessionEvent>,
}

impl ScriptedDecisions {
    pub fn new<G, D>(guesses: G, decisions: D) -> Self
    where
        G: IntoIterator<Item = Guess>,
        D: IntoIterator<Item = Decision>,
    {
        Self {
            guesses: guesses.into_iter().collect(),
            decisions: decisions.into_iter().collect(),
            events: Vec::new(),
        }
    }

    /// Events observed so far, in emission order.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }
}

impl DecisionSource for ScriptedDecisions {
    fn guess(&mut self, _house: Card) -> Result<Guess, GameError> {
        self.guesses.pop_front().ok_or(GameError::InputClosed)
    }

    fn continue_or_stop(&mut self, _pending_reward: u64) -> Result<Decision, GameError> {
        self.decisions.pop_front().ok_or(GameError::InputClosed)
    }

    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(*event);
    }
}

/// Card source dealing a fixed sequence. Returned cards rejoin the back of
/// the queue, so the pool size behaves like a real deck.
#[derive(Debug, Default)]
pub struct ScriptedDeck {
    cards: VecDeque<Card>,
}

impl ScriptedDeck {
    /// Cards are drawn in the given order: house first, then player, per
    /// round.
    pub fn new<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

impl CardSource for ScriptedDeck {
    fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop_front().ok_or(GameError::DeckExhausted)
    }

    fn return_cards(&mut self, cards: &[Card]) {
        self.cards.extend(cards.iter().copied());
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
