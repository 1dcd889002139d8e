//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Occupancy of one winning line as seen by a single player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCount {
    /// Cells holding the player's own symbol
    pub own: usize,
    /// Empty cells
    pub blank: usize,
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row. Stops at the first completed line.
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::is_complete(cells, player, line))
    }

    /// Check if every cell of `line` holds the player's symbol
    pub fn is_complete(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> bool {
        let target = player.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }

    /// Count own and empty cells of a line from the player's point of view
    pub fn count(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> LineCount {
        let target = player.to_cell();
        let mut count = LineCount { own: 0, blank: 0 };
        for &idx in line {
            match cells[idx] {
                Cell::Empty => count.blank += 1,
                c if c == target => count.own += 1,
                _ => {}
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::O;

        assert!(!LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_count_mixed_line() {
        // X O .
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;

        let line = &WINNING_LINES[0];
        assert_eq!(
            LineAnalyzer::count(&cells, Player::X, line),
            LineCount { own: 1, blank: 1 }
        );
        assert_eq!(
            LineAnalyzer::count(&cells, Player::O, line),
            LineCount { own: 1, blank: 1 }
        );
    }

    #[test]
    fn test_every_cell_lies_on_a_line() {
        for pos in 0..9 {
            assert!(WINNING_LINES.iter().any(|line| line.contains(&pos)));
        }
        // centre sits on four lines, corners on three, edges on two
        let lines_through = |pos: usize| WINNING_LINES.iter().filter(|l| l.contains(&pos)).count();
        assert_eq!(lines_through(4), 4);
        assert_eq!(lines_through(0), 3);
        assert_eq!(lines_through(1), 2);
    }
}
