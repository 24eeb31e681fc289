//! Draw and discard decisions for an automated rummy player, with the meld
//! solver and penalty scoring they evaluate hands against.

pub mod action;
pub mod arrangement;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod score;
pub mod state;
pub mod strategy;
pub mod visualize;

pub use crate::action::{DrawSource, PlayerId};
pub use crate::arrangement::{Arrangement, Arranger, Meld, MeldKind, MeldSolver};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{HeuristicBot, RandomBot};
pub use crate::card::{Card, Rank, Suit};
pub use crate::error::{InvalidCard, StrategyError};
pub use crate::score::penalty_score;
pub use crate::state::{PickupHistory, RoundContext, TurnView};
pub use crate::strategy::{
    BandRule, RummyStrategy, StrategyConfig, decide_discard, decide_draw, wanted_ranks,
};
pub use crate::visualize::{
    VisualOptions, describe_arrangement, describe_discard, describe_draw, render_view,
};
