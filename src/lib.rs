//! Tic-tac-toe with a depth-bounded minimax opponent
//!
//! This crate provides:
//! - The 3x3 board with move validation and win detection
//! - A minimax search engine with single-bound pruning and a static heuristic
//! - Human, random and search-based players behind one [`ports::Agent`] trait
//! - Turn orchestration and the menu-driven command-line front end

pub mod app;
pub mod cli;
pub mod error;
pub mod players;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchEngine, SearchReport};
pub use tictactoe::{Board, Cell, Player};
