use crate::action::DrawSource;
use crate::card::Card;
use crate::error::StrategyError;
use crate::state::TurnView;

/// Interface for defining rummy players driven by an external game engine.
pub trait Bot {
    fn choose_draw(
        &mut self,
        view: &TurnView,
        top_discard: Card,
    ) -> Result<DrawSource, StrategyError>;

    fn choose_discard(&mut self, view: &TurnView) -> Result<Card, StrategyError>;
}
