use hilo_engine::cards::{full_deck, Card, Rank, Suit};
use hilo_engine::errors::CardError;

#[test]
fn card_codes_round_trip_for_the_whole_deck() {
    for card in full_deck() {
        let code = card.code();
        assert_eq!(Card::from_code(&code), Ok(card), "code {}", code);
    }
}

#[test]
fn ten_uses_two_digit_code() {
    let ten = Card {
        rank: Rank::Ten,
        suit: Suit::Hearts,
    };
    assert_eq!(ten.code(), "10H");
    assert_eq!(Card::from_code("10H"), Ok(ten));
}

#[test]
fn codes_parse_case_insensitively() {
    let ace_spades = Card {
        rank: Rank::Ace,
        suit: Suit::Spades,
    };
    assert_eq!(Card::from_code("as"), Ok(ace_spades));
    assert_eq!(Card::from_code("As"), Ok(ace_spades));
}

#[test]
fn unknown_suit_fails_loudly() {
    assert_eq!(
        Suit::from_code("x"),
        Err(CardError::UnknownSuit("x".to_string()))
    );
    assert_eq!(
        Card::from_code("AX"),
        Err(CardError::UnknownSuit("X".to_string()))
    );
}

#[test]
fn unknown_rank_fails_loudly() {
    assert_eq!(
        Rank::from_code("1"),
        Err(CardError::UnknownRank("1".to_string()))
    );
    assert_eq!(
        Card::from_code("ZH"),
        Err(CardError::UnknownRank("Z".to_string()))
    );
    // too short to carry both a rank and a suit
    assert!(Card::from_code("Q").is_err());
}

#[test]
fn card_error_messages_name_the_offending_symbol() {
    let err = Suit::from_code("q").unwrap_err();
    assert!(err.to_string().contains("unknown suit 'q'"));
    let err = Rank::from_code("15").unwrap_err();
    assert!(err.to_string().contains("unknown rank '15'"));
}
