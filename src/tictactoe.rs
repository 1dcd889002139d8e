//! Tic-Tac-Toe board, winning lines and turn orchestration

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Player};
pub use game::{Game, GameOutcome, GameRecord, MAX_REJECTED_MOVES, Move};
pub use lines::{LineAnalyzer, LineCount, WINNING_LINES};
