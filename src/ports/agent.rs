//! Agent port - the one capability every player variant shares

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - a source of moves for one side of the board
///
/// Human, random and search-based players all implement this, so the game
/// loop drives any pairing of them without knowing which is which.
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// struct FirstFree(Player);
///
/// impl Agent for FirstFree {
///     fn select_move(&mut self, board: &Board) -> noughts::Result<Option<usize>> {
///         Ok(board.empty_positions().first().copied())
///     }
///
///     fn player(&self) -> Player {
///         self.0
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
///
/// let mut agent = FirstFree(Player::O);
/// assert_eq!(agent.select_move(&Board::new()).unwrap(), Some(0));
/// ```
pub trait Agent {
    /// Select a cell (0-8) for this agent's symbol.
    ///
    /// Returns `Ok(None)` when the board has no empty cell left.
    ///
    /// # Errors
    ///
    /// Returns an error when the move source itself fails, e.g. the human's
    /// input stream was closed.
    fn select_move(&mut self, board: &Board) -> Result<Option<usize>>;

    /// The symbol this agent places
    fn player(&self) -> Player;

    /// Display name, used in logs and match summaries
    fn name(&self) -> &str;

    /// Whether a person is typing the moves.
    ///
    /// The game loop only applies its think delay to non-interactive agents.
    fn is_interactive(&self) -> bool {
        false
    }
}
