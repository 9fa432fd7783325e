//! # Deal Command
//!
//! Deals one house/player pair from a fresh shuffled deck and shows how
//! the cards compare. Useful for eyeballing a seed before playing it.

use crate::error::CliError;
use crate::formatters::format_card;
use hilo_engine::compare::{compare, RoundOutcome};
use hilo_engine::deck::{CardSource, Deck};
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let house = deck.draw()?;
    let player = deck.draw()?;
    writeln!(out, "deal: seed={}", seed)?;
    writeln!(out, "House has {}", format_card(&house))?;
    writeln!(out, "You have {}", format_card(&player))?;
    match compare(player, house) {
        RoundOutcome::Higher => writeln!(out, "Your card ranks higher")?,
        RoundOutcome::Lower => writeln!(out, "Your card ranks lower")?,
        RoundOutcome::Equal => writeln!(out, "Cards are equal in rank")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_is_deterministic_for_a_seed() {
        let run = || {
            let mut out = Vec::new();
            handle_deal_command(Some(42), &mut out).unwrap();
            String::from_utf8(out).unwrap()
        };
        let out1 = run();
        assert!(out1.contains("deal: seed=42"));
        assert!(out1.contains("House has "));
        assert!(out1.contains("You have "));
        assert_eq!(out1, run());
    }

    #[test]
    fn test_deal_reports_a_comparison() {
        let mut out = Vec::new();
        handle_deal_command(Some(3), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(
            output.contains("ranks higher")
                || output.contains("ranks lower")
                || output.contains("equal in rank")
        );
    }
}
