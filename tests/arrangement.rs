use rummybot::arrangement::{MAX_SOLVER_HAND, classify_meld};
use rummybot::card::cards_from_ids;
use rummybot::{Arranger, Card, MeldKind, MeldSolver, Rank, StrategyError, penalty_score};

fn hand(ids: &[u8]) -> Vec<Card> {
    cards_from_ids(ids).unwrap()
}

#[test]
fn wildcard_completes_a_set_of_four() {
    // Three TWOs plus NINE of CLUBS as wild.
    let cards = hand(&[1, 2, 3, 31]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Nine).unwrap();
    assert_eq!(arrangement.melds().len(), 1);
    assert_eq!(arrangement.melds()[0].len(), 4);
    assert!(arrangement.residual(&cards).is_empty());
}

#[test]
fn wildcard_extends_a_run() {
    // TWO and THREE of SPADES plus ACE of CLUBS as wild.
    let cards = hand(&[0, 4, 51]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    assert_eq!(classify_meld(&arrangement.melds()[0], Rank::Ace), Some(MeldKind::Run));
    assert!(arrangement.residual(&cards).is_empty());
}

#[test]
fn prefers_the_meld_leaving_fewer_points() {
    // 2-3-4 of SPADES overlaps a set of FOURs; the set leaves 5 points, the run 8.
    let cards = hand(&[0, 4, 8, 9, 10]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    let residual = arrangement.residual(&cards);
    assert_eq!(residual, hand(&[0, 4]));
    assert_eq!(penalty_score(&residual), 5);
}

#[test]
fn finds_disjoint_set_and_run() {
    // Three TWOs and SEVEN-EIGHT-NINE of SPADES.
    let cards = hand(&[0, 1, 2, 20, 24, 28]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    assert_eq!(arrangement.melds().len(), 2);
    assert!(arrangement.residual(&cards).is_empty());
}

#[test]
fn unrelated_cards_form_no_melds() {
    let cards = hand(&[0, 21, 42]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    assert!(arrangement.is_empty());
    assert_eq!(arrangement.residual(&cards), cards);
}

#[test]
fn pairs_do_not_meld() {
    let cards = hand(&[1, 2]);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    assert!(arrangement.is_empty());
}

#[test]
fn solver_handles_its_largest_hand() {
    let ids: Vec<u8> = (0..MAX_SOLVER_HAND as u8).collect();
    let cards = hand(&ids);
    let arrangement = MeldSolver.best_arrangement(&cards, Rank::Ace).unwrap();
    // Four full sets of TWO through FIVE.
    assert!(arrangement.residual(&cards).is_empty());
}

#[test]
fn solver_rejects_oversized_hand() {
    let ids: Vec<u8> = (0..=MAX_SOLVER_HAND as u8).collect();
    let result = MeldSolver.best_arrangement(&hand(&ids), Rank::Ace);
    assert!(matches!(result, Err(StrategyError::HandTooLarge { .. })));
}
