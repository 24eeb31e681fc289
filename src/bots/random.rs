use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::DrawSource;
use crate::bot::Bot;
use crate::card::Card;
use crate::error::StrategyError;
use crate::state::TurnView;

/// Baseline bot that picks a pile and a discard uniformly at random.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn choose_draw(
        &mut self,
        view: &TurnView,
        top_discard: Card,
    ) -> Result<DrawSource, StrategyError> {
        if view.hand.contains(&top_discard) {
            return Err(StrategyError::DuplicateCard(top_discard));
        }
        if self.rng.gen_bool(0.5) {
            Ok(DrawSource::Discard)
        } else {
            Ok(DrawSource::Stock)
        }
    }

    fn choose_discard(&mut self, view: &TurnView) -> Result<Card, StrategyError> {
        view.hand
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::EmptyHand)
    }
}
