//! Penalty scoring for cards left outside any meld.
//!
//! Points per rank: TWO..TEN score their face value, JACK/QUEEN/KING score 10,
//! ACE scores 1. Melded cards, wild ones included, are never scored.

use crate::card::{Card, RANK_COUNT, Rank};

/// Penalty points indexed by rank (TWO first, ACE last).
pub const PENALTY_POINTS: [u32; RANK_COUNT] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 1];

#[inline]
pub fn rank_points(rank: Rank) -> u32 {
    PENALTY_POINTS[rank.index() as usize]
}

#[inline]
pub fn card_points(card: Card) -> u32 {
    rank_points(card.rank())
}

/// Sum of penalty points; 0 for an empty set.
pub fn penalty_score(cards: &[Card]) -> u32 {
    cards.iter().map(|&card| card_points(card)).sum()
}
