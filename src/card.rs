use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidCard;

pub const RANK_COUNT: usize = 13;
pub const SUIT_COUNT: usize = 4;
pub const DECK_SIZE: usize = RANK_COUNT * SUIT_COUNT;
pub const MIN_MELD_SIZE: usize = 3;

/// Card rank, ordered from TWO (index 0) up to ACE (index 12).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, InvalidCard> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidCard::RankIndex(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, InvalidCard> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(InvalidCard::SuitIndex(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Hearts => "HEARTS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A card from a standard 52-card deck, identified by `rank * 4 + suit`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    pub fn new(id: u8) -> Result<Self, InvalidCard> {
        if (id as usize) < DECK_SIZE {
            Ok(Self(id))
        } else {
            Err(InvalidCard::OutOfRange(id))
        }
    }

    pub fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self(rank.index() * SUIT_COUNT as u8 + suit.index())
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 / SUIT_COUNT as u8) as usize]
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 % SUIT_COUNT as u8) as usize]
    }

    /// True when the card substitutes for any rank this round.
    #[inline]
    pub fn is_wild(self, wildcard: Rank) -> bool {
        self.rank() == wildcard
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCard;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::new(id)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank(), self.suit())
    }
}

/// Converts raw identifiers into cards, failing on the first invalid id.
pub fn cards_from_ids(ids: &[u8]) -> Result<Vec<Card>, InvalidCard> {
    ids.iter().map(|&id| Card::new(id)).collect()
}

/// Builds a full 52-card deck in identifier order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).map(Card).collect()
}
