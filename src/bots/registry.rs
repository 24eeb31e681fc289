use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bot::Bot;
use crate::bots::{HeuristicBot, RandomBot};
use crate::strategy::{BandRule, StrategyConfig};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - heuristic
/// - heuristic:legacy (single-rank band test)
/// - random[:seed]
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let label = label_for_spec(spec);
    let option = spec.split_once(':').map(|(_, value)| value.trim());
    match label.as_str() {
        "heuristic" => {
            let band_rule = match option {
                None => BandRule::RankSet,
                Some(value) if value.eq_ignore_ascii_case("legacy") => BandRule::LegacySingleRank,
                Some(value) => return Err(format!("unrecognized heuristic option: {value}").into()),
            };
            let config = StrategyConfig::default().with_band_rule(band_rule);
            Ok(Box::new(HeuristicBot::new(config)))
        }
        "random" => {
            let custom_seed = option
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
