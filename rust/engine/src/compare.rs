use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Result of comparing the player's card against the house card for one
/// round. Derived per round, never stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player's rank is above the house rank
    Higher,
    /// Player's rank is below the house rank
    Lower,
    /// Identical ranks (suits are never consulted)
    Equal,
}

/// Ranks the player's card against the house card under the fixed rank
/// table (Ace low, King high). Pure function of the two ranks; two cards of
/// equal rank but different suit compare [`RoundOutcome::Equal`].
pub fn compare(player: Card, house: Card) -> RoundOutcome {
    let p = player.rank.value();
    let h = house.rank.value();
    if p > h {
        RoundOutcome::Higher
    } else if p < h {
        RoundOutcome::Lower
    } else {
        RoundOutcome::Equal
    }
}
