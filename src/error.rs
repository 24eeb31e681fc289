use thiserror::Error;

use crate::card::Card;

/// Errors raised when a decision is requested with inputs that break its contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("cannot choose a discard from an empty hand")]
    EmptyHand,
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("hand of {size} cards exceeds the solver limit of {limit}")]
    HandTooLarge { size: usize, limit: usize },
    #[error("invalid round context: {0}")]
    InvalidContext(&'static str),
    #[error("invalid card: {0}")]
    InvalidCard(#[from] InvalidCard),
}

/// Details of identifiers that do not map onto the deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidCard {
    #[error("card id {0} is outside the 52-card deck")]
    OutOfRange(u8),
    #[error("rank index {0} is out of range")]
    RankIndex(u8),
    #[error("suit index {0} is out of range")]
    SuitIndex(u8),
}
