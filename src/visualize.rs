use std::fmt::Write;

use crate::action::DrawSource;
use crate::arrangement::Arrangement;
use crate::card::Card;
use crate::state::TurnView;

/// Customize turn rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_card_ids: bool,
    pub show_all_pickups: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_card_ids: true,
            show_all_pickups: false,
        }
    }
}

pub fn render_view(view: &TurnView) -> String {
    render_view_with_options(view, VisualOptions::default())
}

pub fn render_view_with_options(view: &TurnView, options: VisualOptions) -> String {
    let mut out = String::new();
    let ctx = &view.context;
    let last_turn = if ctx.last_turn { " (last turn)" } else { "" };
    let _ = writeln!(
        out,
        "Turn {}{}  |  Wildcard rank: {}",
        ctx.turns_this_round, last_turn, ctx.wildcard
    );
    let _ = writeln!(
        out,
        "Seat {} of {} (next: {})",
        ctx.seat,
        ctx.num_players,
        ctx.next_seat()
    );
    let _ = writeln!(out, "Hand: {}", format_cards(&view.hand, options));
    let _ = writeln!(out, "Pickups:");
    for seat in 0..ctx.num_players {
        if seat == ctx.seat {
            continue;
        }
        let is_next = seat == ctx.next_seat();
        if !is_next && !options.show_all_pickups {
            continue;
        }
        let tag = if is_next { " (next)" } else { "" };
        let cards = view.pickups.for_seat(seat);
        let _ = writeln!(out, "  Seat {seat}{tag}: {}", format_cards(cards, options));
    }
    out
}

pub fn describe_draw(source: DrawSource, top_discard: Card) -> String {
    match source {
        DrawSource::Discard => format!("Draw {top_discard} from the discard pile"),
        DrawSource::Stock => format!("Draw from the stock pile (leave {top_discard})"),
    }
}

pub fn describe_discard(card: Card) -> String {
    format!("Discard {card} [{}]", card.id())
}

pub fn describe_arrangement(arrangement: &Arrangement) -> String {
    if arrangement.is_empty() {
        return String::from("(no melds)");
    }
    arrangement
        .melds()
        .iter()
        .map(|meld| {
            let cards = meld
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{cards}]")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card], options: VisualOptions) -> String {
    if cards.is_empty() {
        return String::from("(empty)");
    }
    cards
        .iter()
        .map(|card| {
            if options.show_card_ids {
                format!("{card} [{}]", card.id())
            } else {
                card.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, cards_from_ids};
    use crate::state::{PickupHistory, RoundContext};

    #[test]
    fn render_includes_hand_and_next_seat_pickups() {
        let context = RoundContext::new(Rank::Nine, 2, 3).unwrap().with_turns(4);
        let pickups = PickupHistory::new(vec![cards_from_ids(&[5]).unwrap(), vec![], vec![]]);
        let view = TurnView {
            context,
            hand: cards_from_ids(&[1, 2]).unwrap(),
            pickups,
        };
        let text = render_view(&view);
        assert!(text.contains("Wildcard rank: NINE"));
        assert!(text.contains("TWO of HEARTS [1], TWO of DIAMONDS [2]"));
        assert!(text.contains("Seat 0 (next): THREE of HEARTS [5]"));
        assert!(!text.contains("Seat 1"));
    }

    #[test]
    fn describe_draw_names_the_pile() {
        let card = Card::new(3).unwrap();
        assert!(describe_draw(DrawSource::Discard, card).contains("discard pile"));
        assert!(describe_draw(DrawSource::Stock, card).contains("stock pile"));
        assert_eq!(describe_arrangement(&Arrangement::default()), "(no melds)");
    }
}
