use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use rummybot::card::cards_from_ids;
use rummybot::visualize::render_view_with_options;
use rummybot::{
    Arranger, Card, DrawSource, MeldSolver, PickupHistory, Rank, RoundContext, TurnView,
    VisualOptions, create_bot_from_spec, describe_arrangement, describe_discard, describe_draw,
};

/// Default seed for bots that need randomness.
const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

#[derive(Parser, Debug)]
#[command(
    name = "advise",
    about = "Ask a rummy bot where to draw from and what to discard."
)]
struct Args {
    /// Card ids in hand, comma separated (id = rank * 4 + suit)
    #[arg(long = "hand", value_delimiter = ',', required = true)]
    hand: Vec<u8>,

    /// Wildcard rank index for the round (0 = TWO .. 12 = ACE)
    #[arg(short = 'w', long = "wildcard")]
    wildcard: u8,

    /// Face-up card on the discard pile; enables the draw decision
    #[arg(short = 't', long = "top-discard")]
    top_discard: Option<u8>,

    /// Seat position of the advised player
    #[arg(long = "seat", default_value_t = 0)]
    seat: usize,

    /// Player count (defaults to the number of seats in --pickups, or 2)
    #[arg(long = "players")]
    players: Option<usize>,

    /// Discard-pile pickups per seat: seats split by ';', cards by ',' (e.g. "5;6,7;")
    #[arg(long = "pickups", default_value = "")]
    pickups: String,

    /// Turns played so far this round
    #[arg(long = "turn", default_value_t = 0)]
    turn: u32,

    /// Mark this as the player's last turn of the round
    #[arg(long = "last-turn", action = ArgAction::SetTrue)]
    last_turn: bool,

    /// Bot spec: heuristic, heuristic:legacy or random[:seed]
    #[arg(short = 'b', long = "bot", default_value = "heuristic")]
    bot: String,

    /// Seed for randomized bots
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Hide raw card ids in the rendered view
    #[arg(long = "no-ids", action = ArgAction::SetTrue)]
    no_ids: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rummybot={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_pickups(raw: &str) -> Result<PickupHistory, Box<dyn Error>> {
    if raw.trim().is_empty() {
        return Ok(PickupHistory::default());
    }
    let segments: Vec<&str> = raw.split(';').collect();
    let mut history = PickupHistory::new(vec![Vec::new(); segments.len()]);
    for (seat, segment) in segments.into_iter().enumerate() {
        for token in segment.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let id = token
                .parse::<u8>()
                .map_err(|_| format!("invalid card id in pickups: {token}"))?;
            history.record(seat, Card::new(id)?);
        }
    }
    Ok(history)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let hand = cards_from_ids(&args.hand)?;
    let wildcard = Rank::from_index(args.wildcard)?;
    let pickups = parse_pickups(&args.pickups)?;
    let num_players = args.players.unwrap_or(match pickups.seat_count() {
        0 => 2,
        seats => seats,
    });
    let context = RoundContext::new(wildcard, args.seat, num_players)?
        .with_turns(args.turn)
        .with_last_turn(args.last_turn);
    let mut view = TurnView {
        context,
        hand,
        pickups,
    };

    let options = VisualOptions {
        show_card_ids: !args.no_ids,
        show_all_pickups: true,
    };
    println!("{}", render_view_with_options(&view, options));
    let arrangement = MeldSolver.best_arrangement(&view.hand, wildcard)?;
    println!("Melds: {}", describe_arrangement(&arrangement));

    let mut bot = create_bot_from_spec(&args.bot, args.seat, args.seed)?;
    if let Some(id) = args.top_discard {
        let top_discard = Card::new(id)?;
        let source = bot.choose_draw(&view, top_discard)?;
        println!("{}", describe_draw(source, top_discard));
        if source == DrawSource::Discard {
            view.hand.push(top_discard);
        }
    }
    if view.hand.is_empty() {
        println!("Nothing to discard.");
        return Ok(());
    }
    let discard = bot.choose_discard(&view)?;
    println!("{}", describe_discard(discard));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seats_and_trailing_empty_seat() {
        let pickups = parse_pickups("5;6,7;").unwrap();
        assert_eq!(pickups.seat_count(), 3);
        assert_eq!(pickups.for_seat(0), &[Card::new(5).unwrap()]);
        assert_eq!(
            pickups.for_seat(1),
            &[Card::new(6).unwrap(), Card::new(7).unwrap()]
        );
        assert!(pickups.for_seat(2).is_empty());
    }

    #[test]
    fn blank_pickups_mean_no_seats() {
        assert_eq!(parse_pickups("  ").unwrap().seat_count(), 0);
        assert_eq!(parse_pickups(" ; 3 ").unwrap().seat_count(), 2);
    }

    #[test]
    fn rejects_bad_card_ids() {
        assert!(parse_pickups("5;x").is_err());
        assert!(parse_pickups("52").is_err());
    }
}
