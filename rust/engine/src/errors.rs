use thiserror::Error;

/// Data-integrity failures on card symbols coming from outside the fixed
/// rank and suit enumerations. These must never be silently defaulted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Cannot map rank to symbol, unknown rank '{0}'")]
    UnknownRank(String),
    #[error("Cannot map suit to symbol, unknown suit '{0}'")]
    UnknownSuit(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck has no cards left to draw")]
    DeckExhausted,
    #[error("Input stream closed before a decision was made")]
    InputClosed,
    #[error(transparent)]
    Card(#[from] CardError),
}
