//! Terminal output for the CLI

use std::io::Write;

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, GameRecord, Move},
};

/// Prints the legend, the board after every move and the final result
pub struct ConsoleObserver<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> ConsoleObserver<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<'_, W> {
    fn on_start(&mut self, board: &Board) -> Result<()> {
        writeln!(self.out, "To choose a cell, enter the corresponding number:")?;
        write!(self.out, "{}", board.render(true))?;
        writeln!(self.out, "Let's begin!")?;
        Ok(())
    }

    fn on_move(&mut self, board: &Board, _mv: Move) -> Result<()> {
        write!(self.out, "{}", board.render(false))?;
        writeln!(self.out, " ")?;
        Ok(())
    }

    fn on_finish(&mut self, _board: &Board, record: &GameRecord) -> Result<()> {
        writeln!(self.out, "{}", record.summary())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with its share of `total`
pub fn format_share(count: usize, total: usize) -> String {
    let rate = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!("{count} ({rate:.1}%)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{GameOutcome, Player};

    #[test]
    fn test_console_transcript() {
        let mut out = Vec::new();
        let mut board = Board::new();
        {
            let mut observer = ConsoleObserver::new(&mut out);
            observer.on_start(&board).unwrap();
            board.apply(Player::X, 4).unwrap();
            observer
                .on_move(&board, Move { position: 4, player: Player::X })
                .unwrap();
            let record = GameRecord {
                moves: vec![Move { position: 4, player: Player::X }],
                outcome: GameOutcome::Draw,
                board,
            };
            observer.on_finish(&board, &record).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("To choose a cell, enter the corresponding number:\n"));
        assert!(text.contains("* 1 | 2 | 3 *"));
        assert!(text.contains("Let's begin!"));
        assert!(text.contains("*   | X |   *"));
        assert!(text.ends_with("The game ended in a tie.\n"));
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(1, 4), "1 (25.0%)");
        assert_eq!(format_share(0, 0), "0 (0.0%)");
    }
}
