//! Decomposition of a hand into melds.
//!
//! A meld is either a *set* (three or more cards whose natural cards share a
//! rank) or a *run* (three or more cards of one suit with consecutive ranks,
//! ACE high only). Cards of the round's wildcard rank fill any position.
//! [`MeldSolver`] searches every disjoint combination of melds and keeps the
//! one that leaves the fewest penalty points behind.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::card::{Card, MIN_MELD_SIZE, RANK_COUNT, Rank};
use crate::error::StrategyError;
use crate::score::card_points;

/// Largest hand the exhaustive solver accepts.
pub const MAX_SOLVER_HAND: usize = 16;

/// Bitmask over hand positions.
type HandMask = u32;

pub type Meld = Vec<Card>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MeldKind {
    Set,
    Run,
}

/// Disjoint melds drawn from one hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrangement {
    melds: Vec<Meld>,
}

impl Arrangement {
    pub fn new(melds: Vec<Meld>) -> Self {
        Self { melds }
    }

    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    pub fn melded_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.melds.iter().flatten().copied()
    }

    /// Cards of `hand` left outside every meld, in hand order.
    pub fn residual(&self, hand: &[Card]) -> Vec<Card> {
        let melded: HashSet<Card> = self.melded_cards().collect();
        hand.iter()
            .copied()
            .filter(|card| !melded.contains(card))
            .collect()
    }
}

/// Finds the best arrangement of a hand for a given wildcard rank.
pub trait Arranger {
    fn best_arrangement(&self, hand: &[Card], wildcard: Rank) -> Result<Arrangement, StrategyError>;
}

impl<A: Arranger + ?Sized> Arranger for &A {
    fn best_arrangement(&self, hand: &[Card], wildcard: Rank) -> Result<Arrangement, StrategyError> {
        (**self).best_arrangement(hand, wildcard)
    }
}

/// Classifies `cards` as a set or a run, preferring set when both apply.
pub fn classify_meld(cards: &[Card], wildcard: Rank) -> Option<MeldKind> {
    if cards.len() < MIN_MELD_SIZE {
        return None;
    }
    if is_set(cards, wildcard) {
        Some(MeldKind::Set)
    } else if is_run(cards, wildcard) {
        Some(MeldKind::Run)
    } else {
        None
    }
}

fn is_set(cards: &[Card], wildcard: Rank) -> bool {
    let mut naturals = cards.iter().filter(|card| !card.is_wild(wildcard));
    match naturals.next() {
        Some(first) => naturals.all(|card| card.rank() == first.rank()),
        None => true,
    }
}

fn is_run(cards: &[Card], wildcard: Rank) -> bool {
    if cards.len() > RANK_COUNT {
        return false;
    }
    let naturals: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|card| !card.is_wild(wildcard))
        .collect();
    let Some(first) = naturals.first() else {
        return true;
    };
    if naturals.iter().any(|card| card.suit() != first.suit()) {
        return false;
    }
    let mut ranks: Vec<u8> = naturals.iter().map(|card| card.rank().index()).collect();
    ranks.sort_unstable();
    if ranks.windows(2).any(|pair| pair[0] == pair[1]) {
        return false;
    }
    let span = (ranks[ranks.len() - 1] - ranks[0]) as usize + 1;
    span <= cards.len()
}

/// Exhaustive solver: memoised search over bitmasks of hand positions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeldSolver;

#[derive(Clone, Copy, Debug)]
struct Plan {
    penalty: u32,
    leftover: u32,
    /// Meld covering the lowest card of the mask, or `None` when it stays loose.
    meld: Option<HandMask>,
}

impl Plan {
    const EMPTY: Plan = Plan {
        penalty: 0,
        leftover: 0,
        meld: None,
    };

    fn key(&self) -> (u32, u32) {
        (self.penalty, self.leftover)
    }
}

fn cards_in(mask: HandMask, hand: &[Card]) -> Vec<Card> {
    hand.iter()
        .enumerate()
        .filter(|(index, _)| mask & (1 << index) != 0)
        .map(|(_, card)| *card)
        .collect()
}

fn meld_candidates(hand: &[Card], wildcard: Rank) -> Vec<HandMask> {
    let full: HandMask = (1 << hand.len()) - 1;
    (1..=full)
        .filter(|mask| mask.count_ones() as usize >= MIN_MELD_SIZE)
        .filter(|&mask| classify_meld(&cards_in(mask, hand), wildcard).is_some())
        .collect()
}

fn solve(mask: HandMask, hand: &[Card], candidates: &[HandMask], memo: &mut [Option<Plan>]) -> Plan {
    if mask == 0 {
        return Plan::EMPTY;
    }
    if let Some(plan) = memo[mask as usize] {
        return plan;
    }
    let lowest = mask.trailing_zeros() as usize;
    let lowest_bit: HandMask = 1 << lowest;

    let rest = solve(mask & !lowest_bit, hand, candidates, memo);
    let mut best = Plan {
        penalty: rest.penalty + card_points(hand[lowest]),
        leftover: rest.leftover + 1,
        meld: None,
    };
    for &meld in candidates {
        if meld & lowest_bit == 0 || meld & !mask != 0 {
            continue;
        }
        let rest = solve(mask & !meld, hand, candidates, memo);
        let plan = Plan {
            penalty: rest.penalty,
            leftover: rest.leftover,
            meld: Some(meld),
        };
        if plan.key() < best.key() {
            best = plan;
        }
    }
    memo[mask as usize] = Some(best);
    best
}

impl Arranger for MeldSolver {
    fn best_arrangement(&self, hand: &[Card], wildcard: Rank) -> Result<Arrangement, StrategyError> {
        if hand.len() > MAX_SOLVER_HAND {
            return Err(StrategyError::HandTooLarge {
                size: hand.len(),
                limit: MAX_SOLVER_HAND,
            });
        }
        let candidates = meld_candidates(hand, wildcard);
        let full: HandMask = (1 << hand.len()) - 1;
        let mut memo = vec![None; 1 << hand.len()];
        let best = solve(full, hand, &candidates, &mut memo);

        let mut melds = Vec::new();
        let mut mask = full;
        while mask != 0 {
            let Some(plan) = memo[mask as usize] else {
                break;
            };
            match plan.meld {
                Some(meld) => {
                    melds.push(cards_in(meld, hand));
                    mask &= !meld;
                }
                None => mask &= mask - 1,
            }
        }
        trace!(
            target: "rummybot::arrangement",
            hand_size = hand.len(),
            candidates = candidates.len(),
            melds = melds.len(),
            penalty = best.penalty,
            "arranged hand"
        );
        Ok(Arrangement::new(melds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::cards_from_ids;

    #[test]
    fn set_accepts_wild_filler() {
        // TWO, TWO, NINE with NINE wild.
        let cards = cards_from_ids(&[1, 2, 31]).unwrap();
        assert_eq!(classify_meld(&cards, Rank::Nine), Some(MeldKind::Set));
        assert_eq!(classify_meld(&cards, Rank::Ace), None);
    }

    #[test]
    fn run_needs_single_suit_and_bounded_gaps() {
        // 2, 3, 4 of SPADES
        let run = cards_from_ids(&[0, 4, 8]).unwrap();
        assert_eq!(classify_meld(&run, Rank::Ace), Some(MeldKind::Run));
        // 2, 3 of SPADES and 4 of HEARTS
        let mixed = cards_from_ids(&[0, 4, 9]).unwrap();
        assert_eq!(classify_meld(&mixed, Rank::Ace), None);
        // 2 and 5 of SPADES plus one wild: span 4 does not fit three cards
        let gappy = cards_from_ids(&[0, 12, 51]).unwrap();
        assert_eq!(classify_meld(&gappy, Rank::Ace), None);
        // 2 and 4 of SPADES plus one wild filling the gap
        let filled = cards_from_ids(&[0, 8, 51]).unwrap();
        assert_eq!(classify_meld(&filled, Rank::Ace), Some(MeldKind::Run));
    }

    #[test]
    fn ace_does_not_wrap_below_two() {
        // KING, ACE, TWO of SPADES
        let wrapped = cards_from_ids(&[44, 48, 0]).unwrap();
        assert_eq!(classify_meld(&wrapped, Rank::Five), None);
    }

    #[test]
    fn empty_hand_has_empty_arrangement() {
        let arrangement = MeldSolver.best_arrangement(&[], Rank::Two).unwrap();
        assert!(arrangement.is_empty());
        assert!(arrangement.residual(&[]).is_empty());
    }

    #[test]
    fn oversized_hands_are_rejected() {
        let hand = cards_from_ids(&(0..17).collect::<Vec<u8>>()).unwrap();
        assert_eq!(
            MeldSolver.best_arrangement(&hand, Rank::Two),
            Err(StrategyError::HandTooLarge {
                size: 17,
                limit: MAX_SOLVER_HAND
            })
        );
    }
}
