use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Rank};
use crate::error::StrategyError;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;

/// Immutable snapshot of the round a decision is made in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundContext {
    pub wildcard: Rank,
    pub seat: PlayerId,
    pub num_players: usize,
    pub turns_this_round: u32,
    pub last_turn: bool,
}

impl RoundContext {
    pub fn new(wildcard: Rank, seat: PlayerId, num_players: usize) -> Result<Self, StrategyError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(StrategyError::InvalidContext(
                "players must be between 2 and 8",
            ));
        }
        if seat >= num_players {
            return Err(StrategyError::InvalidContext(
                "seat position must be below the player count",
            ));
        }
        Ok(Self {
            wildcard,
            seat,
            num_players,
            turns_this_round: 0,
            last_turn: false,
        })
    }

    pub fn with_turns(mut self, turns_this_round: u32) -> Self {
        self.turns_this_round = turns_this_round;
        self
    }

    pub fn with_last_turn(mut self, last_turn: bool) -> Self {
        self.last_turn = last_turn;
        self
    }

    /// Seat immediately clockwise, wrapping to 0 at the table boundary.
    pub fn next_seat(&self) -> PlayerId {
        (self.seat + 1) % self.num_players
    }
}

/// Cards each seat has taken from the discard pile this round, in pickup order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PickupHistory {
    seats: Vec<Vec<Card>>,
}

impl PickupHistory {
    pub fn new(seats: Vec<Vec<Card>>) -> Self {
        Self { seats }
    }

    /// Pickups of `seat`; seats that were never recorded read as empty.
    pub fn for_seat(&self, seat: PlayerId) -> &[Card] {
        self.seats.get(seat).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record(&mut self, seat: PlayerId, card: Card) {
        if self.seats.len() <= seat {
            self.seats.resize_with(seat + 1, Vec::new);
        }
        self.seats[seat].push(card);
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

/// Everything a bot is allowed to see when it is asked for a decision.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnView {
    pub context: RoundContext,
    pub hand: Vec<Card>,
    pub pickups: PickupHistory,
}

impl TurnView {
    pub fn neighbor_pickups(&self) -> &[Card] {
        self.pickups.for_seat(self.context.next_seat())
    }
}
