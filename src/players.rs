//! Player variants: human, random and search-based

pub mod human;
pub mod random;
pub mod search;

pub use human::{HumanPlayer, LineSource, parse_position};
pub use random::RandomPlayer;
pub use search::SearchPlayer;
