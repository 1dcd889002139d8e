//! Board representation and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game, identified by the symbol it places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The 3x3 grid, cells in row-major order (0-2 top row, 6-8 bottom row).
///
/// The board does not track whose turn it is; turn order belongs to
/// [`Game`](super::Game). This keeps `apply` usable for any symbol, which is
/// what the interactive program needs when either side may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; 9])
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Parse a board from 9 cell characters; whitespace is ignored.
    ///
    /// `.`, `_` and `-` are empty cells, `X` and `O` are occupied ones.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cell characters are present or any
    /// character is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Copy of the cell state, for handing to the search engine
    pub fn cells(&self) -> [Cell; 9] {
        self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of symbols placed so far (9 minus empty cells)
    pub fn moves_made(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player`'s symbol at `pos`.
    ///
    /// Returns whether the move completes a winning line for `player`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`](crate::Error::InvalidPosition) if `pos > 8`,
    /// [`Error::InvalidMove`](crate::Error::InvalidMove) if the cell is taken.
    /// The board is unchanged on error.
    pub fn apply(&mut self, player: Player, pos: usize) -> Result<bool, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        self.cells[pos] = player.to_cell();
        Ok(self.has_won(player))
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Framed text grid for the terminal.
    ///
    /// With `show_positions` every cell shows its 1-based label instead of its
    /// occupant, which is the legend human players type from.
    pub fn render(&self, show_positions: bool) -> String {
        let border = "*************";
        let mut out = String::with_capacity(14 * 7);
        out.push_str(border);
        out.push('\n');
        for row in 0..3 {
            let label = |col: usize| {
                let pos = 3 * row + col;
                if show_positions {
                    char::from(b'1' + pos as u8)
                } else {
                    match self.cells[pos] {
                        Cell::Empty => ' ',
                        cell => cell.to_char(),
                    }
                }
            };
            out.push_str(&format!("* {} | {} | {} *\n", label(0), label(1), label(2)));
            if row < 2 {
                out.push_str("*-----------*\n");
            }
        }
        out.push_str(border);
        out.push('\n');
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
