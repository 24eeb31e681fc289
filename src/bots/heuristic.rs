use crate::action::DrawSource;
use crate::bot::Bot;
use crate::card::Card;
use crate::error::StrategyError;
use crate::state::TurnView;
use crate::strategy::{RummyStrategy, StrategyConfig};

/// Rule-based player backed by [`RummyStrategy`].
///
/// In plain English:
/// - Take the face-up discard when it is a wildcard, when it lowers the points
///   left after melding, or when it pairs a cheap rank already in hand.
/// - Discard the card whose loss hurts least, unless the next player keeps
///   collecting that rank and a cheaper-to-lose card is available.
#[derive(Clone, Debug, Default)]
pub struct HeuristicBot {
    strategy: RummyStrategy,
}

impl HeuristicBot {
    pub fn new(config: StrategyConfig) -> Self {
        Self {
            strategy: RummyStrategy::new(config),
        }
    }

    pub fn strategy(&self) -> &RummyStrategy {
        &self.strategy
    }
}

impl Bot for HeuristicBot {
    fn choose_draw(
        &mut self,
        view: &TurnView,
        top_discard: Card,
    ) -> Result<DrawSource, StrategyError> {
        self.strategy.decide_draw(&view.hand, top_discard, &view.context)
    }

    fn choose_discard(&mut self, view: &TurnView) -> Result<Card, StrategyError> {
        self.strategy.decide_discard(&view.hand, &view.context, &view.pickups)
    }
}
