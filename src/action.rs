use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based seat of a player at the table.
pub type PlayerId = usize;

/// Pile a player takes their card from at the start of the turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    /// Take the face-up card on top of the discard pile.
    Discard,
    /// Take the unseen top card of the stock pile.
    Stock,
}

impl DrawSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DrawSource::Discard => "discard",
            DrawSource::Stock => "stock",
        }
    }
}

impl fmt::Display for DrawSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
