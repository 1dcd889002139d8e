//! Game-tree search used by the computer player

pub mod engine;
pub mod heuristic;

pub use engine::{
    DEFAULT_MAX_DEPTH, FULL_DEPTH, MAX_SCORE, MIN_SCORE, SearchEngine, SearchReport, WIN_SCORE,
};
pub use heuristic::{line_score, rate_board};
