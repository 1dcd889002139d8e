//! Moves typed at a terminal

use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// A source of typed lines.
///
/// Stdin is read through its own shared buffer, so the menu and both human
/// players can read from it in turn without one of them swallowing input
/// meant for another.
pub trait LineSource {
    /// Read one line into `buf`, returning the number of bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Check a typed 1-based cell number against the board.
///
/// Returns the 0-based position, or the message to show before asking again.
pub fn parse_position(entry: &str, board: &Board) -> std::result::Result<usize, &'static str> {
    let number: i64 = entry
        .trim()
        .parse()
        .map_err(|_| "Position must be an int between 1 and 9")?;
    if !(1..=9).contains(&number) {
        return Err("Choose a number between 1 and 9");
    }
    let position = (number - 1) as usize;
    if !board.is_empty(position) {
        return Err("That position is already occupied");
    }
    Ok(position)
}

/// A person choosing moves by cell number
pub struct HumanPlayer<L, W> {
    player: Player,
    name: String,
    input: L,
    output: W,
}

impl HumanPlayer<Stdin, Stdout> {
    /// Human at the terminal
    pub fn stdio(player: Player) -> Self {
        Self::new(player, io::stdin(), io::stdout())
    }
}

impl<L: LineSource, W: Write> HumanPlayer<L, W> {
    pub fn new(player: Player, input: L, output: W) -> Self {
        Self {
            player,
            name: format!("Human ({player})"),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<L: LineSource, W: Write> Agent for HumanPlayer<L, W> {
    fn select_move(&mut self, board: &Board) -> Result<Option<usize>> {
        if board.is_full() {
            return Ok(None);
        }

        writeln!(self.output, "Player {} turn", self.player)?;
        loop {
            write!(self.output, "What is your move? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }

            match parse_position(&line, board) {
                Ok(position) => return Ok(Some(position)),
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    writeln!(self.output, "Try again")?;
                }
            }
        }
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
