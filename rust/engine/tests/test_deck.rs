use hilo_engine::cards::full_deck;
use hilo_engine::deck::{CardSource, Deck};
use hilo_engine::errors::GameError;
use std::collections::HashSet;

#[test]
fn fresh_deck_holds_52_distinct_cards() {
    let cards = full_deck();
    assert_eq!(cards.len(), 52);
    let distinct: HashSet<_> = cards.iter().collect();
    assert_eq!(distinct.len(), 52);
}

#[test]
fn draw_removes_and_return_restores() {
    let mut deck = Deck::new_with_seed(7);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);

    let house = deck.draw().expect("draw house");
    let player = deck.draw().expect("draw player");
    assert_eq!(deck.remaining(), 50);
    assert_ne!(house, player);

    deck.return_cards(&[house, player]);
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn repeated_draw_return_cycles_conserve_the_deck() {
    let mut deck = Deck::new_with_seed(99);
    deck.shuffle();
    for _ in 0..200 {
        let a = deck.draw().unwrap();
        let b = deck.draw().unwrap();
        deck.return_cards(&[a, b]);
    }
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn same_seed_deals_identical_sequences() {
    let mut d1 = Deck::new_with_seed(42);
    let mut d2 = Deck::new_with_seed(42);
    d1.shuffle();
    d2.shuffle();
    for _ in 0..52 {
        assert_eq!(d1.draw().unwrap(), d2.draw().unwrap());
    }
}

#[test]
fn exhausted_deck_reports_an_error() {
    let mut deck = Deck::new_with_seed(1);
    for _ in 0..52 {
        deck.draw().unwrap();
    }
    assert_eq!(deck.draw(), Err(GameError::DeckExhausted));
}
