//! Draw and discard decisions for an automated rummy player.
//!
//! Draw rules, first match wins:
//! - The top discard is a wildcard: take it.
//! - Taking the top discard strictly lowers the penalty left after melding: take it.
//! - The top discard pairs a rank already in hand, outside the high-penalty band: take it.
//! - Otherwise draw from the stock.
//!
//! Discard picks the card whose removal leaves the lowest penalty, then may swap
//! it for a cheaper-to-lose card when the next seat keeps picking up that rank.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{DrawSource, PlayerId};
use crate::arrangement::{Arranger, MeldSolver};
use crate::card::{Card, Rank};
use crate::error::StrategyError;
use crate::score::{card_points, penalty_score};
use crate::state::{MIN_PLAYERS, PickupHistory, RoundContext};

/// Rank indices EIGHT through KING: expensive to hold and slow to meld.
pub const HIGH_PENALTY_BAND: std::ops::RangeInclusive<u8> = 6..=11;

/// How the high-penalty band is tested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandRule {
    /// Membership in [`HIGH_PENALTY_BAND`].
    #[default]
    RankSet,
    /// Historical behaviour: the band collapses to the single rank index 6.
    LegacySingleRank,
}

impl BandRule {
    pub fn contains(self, rank: Rank) -> bool {
        match self {
            BandRule::RankSet => HIGH_PENALTY_BAND.contains(&rank.index()),
            BandRule::LegacySingleRank => rank.index() == *HIGH_PENALTY_BAND.start(),
        }
    }
}

/// Tunables for [`RummyStrategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub band_rule: BandRule,
}

impl StrategyConfig {
    pub fn with_band_rule(mut self, band_rule: BandRule) -> Self {
        self.band_rule = band_rule;
        self
    }
}

/// Stateless decision maker; every call works on copies of its inputs.
#[derive(Clone, Debug, Default)]
pub struct RummyStrategy<A = MeldSolver> {
    arranger: A,
    config: StrategyConfig,
}

impl RummyStrategy<MeldSolver> {
    pub fn new(config: StrategyConfig) -> Self {
        Self::with_arranger(MeldSolver, config)
    }
}

impl<A: Arranger> RummyStrategy<A> {
    pub fn with_arranger(arranger: A, config: StrategyConfig) -> Self {
        Self { arranger, config }
    }

    /// Chooses where to draw from given the face-up `top_discard`.
    pub fn decide_draw(
        &self,
        hand: &[Card],
        top_discard: Card,
        ctx: &RoundContext,
    ) -> Result<DrawSource, StrategyError> {
        ensure_distinct(hand)?;
        if hand.contains(&top_discard) {
            return Err(StrategyError::DuplicateCard(top_discard));
        }
        let wildcard = ctx.wildcard;
        let rank = top_discard.rank();

        if rank == wildcard {
            log_draw(ctx, top_discard, "wildcard", DrawSource::Discard);
            return Ok(DrawSource::Discard);
        }

        let mut with_discard = hand.to_vec();
        with_discard.push(top_discard);
        let current = self.residual_penalty(hand, wildcard)?;
        let improved = self.residual_penalty(&with_discard, wildcard)?;
        if improved < current {
            debug!(
                target: "rummybot::draw",
                seat = ctx.seat,
                current,
                improved,
                "top discard lowers penalty"
            );
            log_draw(ctx, top_discard, "lower_penalty", DrawSource::Discard);
            return Ok(DrawSource::Discard);
        }

        let pairs_hand = hand.iter().any(|card| card.rank() == rank);
        if pairs_hand && !self.config.band_rule.contains(rank) {
            log_draw(ctx, top_discard, "pairs_rank", DrawSource::Discard);
            return Ok(DrawSource::Discard);
        }

        log_draw(ctx, top_discard, "default", DrawSource::Stock);
        Ok(DrawSource::Stock)
    }

    /// Chooses the card to discard; the result is always an element of `hand`.
    pub fn decide_discard(
        &self,
        hand: &[Card],
        ctx: &RoundContext,
        pickups: &PickupHistory,
    ) -> Result<Card, StrategyError> {
        ensure_distinct(hand)?;
        let wildcard = ctx.wildcard;
        let best = self.best_local_discard(hand, wildcard)?;

        let neighbor = ctx.next_seat();
        let neighbor_pickups = pickups.for_seat(neighbor);
        if neighbor_pickups.is_empty() {
            log_discard(ctx, best, "self_optimal");
            return Ok(best);
        }

        let wanted = wanted_ranks(neighbor_pickups);
        if !wanted.contains(&best.rank()) {
            log_discard(ctx, best, "not_wanted");
            return Ok(best);
        }
        if self.config.band_rule.contains(best.rank()) {
            log_discard(ctx, best, "high_penalty_band");
            return Ok(best);
        }

        let working: Vec<Card> = hand.iter().copied().filter(|&card| card != best).collect();
        let remainder = self.arranger.best_arrangement(&working, wildcard)?.residual(&working);
        if remainder.is_empty() {
            log_discard(ctx, best, "going_out");
            return Ok(best);
        }

        let unwanted: Vec<Card> = remainder
            .into_iter()
            .filter(|card| !wanted.contains(&card.rank()))
            .collect();
        if unwanted.is_empty() {
            log_discard(ctx, best, "all_wanted");
            return Ok(best);
        }

        let counts = rank_counts(&unwanted);
        let singles: Vec<Card> = unwanted
            .into_iter()
            .filter(|card| counts.get(&card.rank()).copied().unwrap_or_default() <= 1)
            .collect();

        match highest_penalty(&singles) {
            Some(alternative) => {
                debug!(
                    target: "rummybot::discard",
                    seat = ctx.seat,
                    neighbor,
                    avoided = %best,
                    "holding a rank the next seat collects"
                );
                log_discard(ctx, alternative, "hinder_neighbor");
                Ok(alternative)
            }
            None => {
                log_discard(ctx, best, "only_pairs_left");
                Ok(best)
            }
        }
    }

    /// Card whose removal leaves the lowest residual penalty; ties go to the lowest index.
    pub fn best_local_discard(&self, hand: &[Card], wildcard: Rank) -> Result<Card, StrategyError> {
        let mut best: Option<(u32, Card)> = None;
        for (index, &card) in hand.iter().enumerate() {
            let mut candidate = hand.to_vec();
            candidate.remove(index);
            let penalty = self.residual_penalty(&candidate, wildcard)?;
            if best.is_none_or(|(lowest, _)| penalty < lowest) {
                best = Some((penalty, card));
            }
        }
        best.map(|(_, card)| card).ok_or(StrategyError::EmptyHand)
    }

    /// Penalty of the cards left after the best arrangement of `hand`.
    pub fn residual_penalty(&self, hand: &[Card], wildcard: Rank) -> Result<u32, StrategyError> {
        let arrangement = self.arranger.best_arrangement(hand, wildcard)?;
        Ok(penalty_score(&arrangement.residual(hand)))
    }
}

/// Positional form of [`RummyStrategy::decide_draw`] with the default solver and config.
///
/// `neighbor_pickups` does not influence the draw; the player count it implies is
/// only widened to cover `seat_position`, so any pickup list is accepted.
pub fn decide_draw(
    hand: &[Card],
    top_discard: Card,
    is_last_turn: bool,
    neighbor_pickups: &[Vec<Card>],
    seat_position: PlayerId,
    wildcard_rank: Rank,
    turns_this_round: u32,
) -> Result<DrawSource, StrategyError> {
    let ctx = RoundContext {
        wildcard: wildcard_rank,
        seat: seat_position,
        num_players: neighbor_pickups.len().max(seat_position + 1).max(MIN_PLAYERS),
        turns_this_round,
        last_turn: is_last_turn,
    };
    RummyStrategy::new(StrategyConfig::default()).decide_draw(hand, top_discard, &ctx)
}

/// Positional form of [`RummyStrategy::decide_discard`] with the default solver and config.
pub fn decide_discard(
    hand: &[Card],
    is_last_turn: bool,
    neighbor_pickups: &[Vec<Card>],
    seat_position: PlayerId,
    wildcard_rank: Rank,
    turns_this_round: u32,
) -> Result<Card, StrategyError> {
    let ctx = RoundContext::new(wildcard_rank, seat_position, neighbor_pickups.len())?
        .with_turns(turns_this_round)
        .with_last_turn(is_last_turn);
    let pickups = PickupHistory::new(neighbor_pickups.to_vec());
    RummyStrategy::new(StrategyConfig::default()).decide_discard(hand, &ctx, &pickups)
}

fn ensure_distinct(hand: &[Card]) -> Result<(), StrategyError> {
    let mut seen = HashSet::with_capacity(hand.len());
    for &card in hand {
        if !seen.insert(card) {
            return Err(StrategyError::DuplicateCard(card));
        }
    }
    Ok(())
}

fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.rank()).or_insert(0) += 1;
    }
    counts
}

/// Every rank the cards contain at the highest frequency.
pub fn wanted_ranks(pickups: &[Card]) -> HashSet<Rank> {
    let counts = rank_counts(pickups);
    let max = counts.values().copied().max().unwrap_or_default();
    counts
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(rank, _)| rank)
        .collect()
}

/// Costliest card, first in order among equals.
fn highest_penalty(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().fold(None, |best, card| match best {
        Some(current) if card_points(current) >= card_points(card) => Some(current),
        _ => Some(card),
    })
}

fn log_draw(ctx: &RoundContext, top_discard: Card, rule: &'static str, choice: DrawSource) {
    debug!(
        target: "rummybot::draw",
        seat = ctx.seat,
        wildcard = %ctx.wildcard,
        turn = ctx.turns_this_round,
        last_turn = ctx.last_turn,
        top_discard = %top_discard,
        rule,
        choice = %choice,
        "draw decided"
    );
}

fn log_discard(ctx: &RoundContext, card: Card, rule: &'static str) {
    debug!(
        target: "rummybot::discard",
        seat = ctx.seat,
        wildcard = %ctx.wildcard,
        turn = ctx.turns_this_round,
        last_turn = ctx.last_turn,
        rule,
        card = %card,
        "discard decided"
    );
}
