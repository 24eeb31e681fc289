pub mod heuristic;
pub mod random;
pub mod registry;

pub use heuristic::HeuristicBot;
pub use random::RandomBot;
