//! Observer port - presentation hooks for a running game

use crate::{
    Result,
    tictactoe::{Board, GameRecord, Move},
};

/// Observer trait for following a game as it is played
///
/// # Event Sequence
///
/// 1. `on_start(board)` - once, with the empty board
/// 2. `on_move(board, mv)` - after every accepted move
/// 3. `on_finish(board, record)` - once, after a win or a full board
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_start(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called with the board after `mv` has been applied.
    fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    fn on_finish(&mut self, _board: &Board, _record: &GameRecord) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl GameObserver for SilentObserver {}
