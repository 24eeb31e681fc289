use std::collections::HashSet;

use proptest::prelude::*;
use rummybot::arrangement::classify_meld;
use rummybot::{
    Arranger, Card, DrawSource, MeldSolver, PickupHistory, Rank, RoundContext, RummyStrategy,
    StrategyConfig,
};

fn deck_ids() -> Vec<u8> {
    (0..52).collect()
}

fn rank_strategy() -> impl Strategy<Value = Rank> {
    (0u8..13).prop_map(|index| Rank::from_index(index).unwrap())
}

/// Distinct cards in random order; the first card doubles as the top discard.
fn cards_strategy(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(deck_ids(), 1..=max)
        .prop_shuffle()
        .prop_map(|ids| ids.into_iter().map(|id| Card::new(id).unwrap()).collect())
}

fn pickups_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((0u8..52).prop_map(|id| Card::new(id).unwrap()), 0..5)
}

fn strategy() -> RummyStrategy {
    RummyStrategy::new(StrategyConfig::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn draw_is_total_and_repeatable(cards in cards_strategy(9), wildcard in rank_strategy()) {
        let (top, hand) = cards.split_first().unwrap();
        let ctx = RoundContext::new(wildcard, 0, 2).unwrap();
        let first = strategy().decide_draw(hand, *top, &ctx);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, strategy().decide_draw(hand, *top, &ctx));
    }

    #[test]
    fn wildcard_discard_is_always_taken(cards in cards_strategy(9)) {
        let (top, hand) = cards.split_first().unwrap();
        let ctx = RoundContext::new(top.rank(), 1, 4).unwrap();
        prop_assert_eq!(strategy().decide_draw(hand, *top, &ctx), Ok(DrawSource::Discard));
    }

    #[test]
    fn discard_is_a_member_of_the_hand(
        hand in cards_strategy(9),
        wildcard in rank_strategy(),
        neighbor in pickups_strategy(),
    ) {
        let ctx = RoundContext::new(wildcard, 0, 3).unwrap();
        let pickups = PickupHistory::new(vec![vec![], neighbor, vec![]]);
        let choice = strategy().decide_discard(&hand, &ctx, &pickups).unwrap();
        prop_assert!(hand.contains(&choice));
        prop_assert_eq!(Ok(choice), strategy().decide_discard(&hand, &ctx, &pickups));
    }

    #[test]
    fn discard_is_self_optimal_without_neighbor_signal(
        hand in cards_strategy(9),
        wildcard in rank_strategy(),
    ) {
        let strategy = strategy();
        let ctx = RoundContext::new(wildcard, 0, 2).unwrap();
        let choice = strategy.decide_discard(&hand, &ctx, &PickupHistory::default()).unwrap();
        let score_without = |card: Card| {
            let rest: Vec<Card> = hand.iter().copied().filter(|&c| c != card).collect();
            strategy.residual_penalty(&rest, wildcard).unwrap()
        };
        let chosen = score_without(choice);
        for &other in &hand {
            prop_assert!(chosen <= score_without(other));
        }
    }

    #[test]
    fn arrangement_melds_are_valid_and_disjoint(
        hand in cards_strategy(10),
        wildcard in rank_strategy(),
    ) {
        let arrangement = MeldSolver.best_arrangement(&hand, wildcard).unwrap();
        let mut seen = HashSet::new();
        for meld in arrangement.melds() {
            prop_assert!(classify_meld(meld, wildcard).is_some());
            for card in meld {
                prop_assert!(hand.contains(card));
                prop_assert!(seen.insert(*card));
            }
        }
    }
}
