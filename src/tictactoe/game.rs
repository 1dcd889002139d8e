//! Turn orchestration between two agents

use std::{thread, time::Duration};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::board::{Board, Player};
use crate::{
    Error, Result,
    ports::{Agent, GameObserver},
};

/// Consecutive illegal proposals tolerated from one agent before the game is abandoned
pub const MAX_REJECTED_MOVES: usize = 3;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
    pub board: Board,
}

impl GameRecord {
    /// The closing line shown to players
    pub fn summary(&self) -> String {
        match self.outcome {
            GameOutcome::Win(player) => format!(
                "Victory!! Player {player} has won in {} moves",
                self.moves.len()
            ),
            GameOutcome::Draw => "The game ended in a tie.".to_string(),
        }
    }
}

/// A game between two agents; the first one passed moves first
pub struct Game {
    players: [Box<dyn Agent>; 2],
    move_delay: Duration,
}

impl Game {
    /// Pair two agents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if both agents place the same symbol.
    pub fn new(first: Box<dyn Agent>, second: Box<dyn Agent>) -> Result<Self> {
        if first.player() == second.player() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "both agents ('{}' and '{}') play {}",
                    first.name(),
                    second.name(),
                    first.player()
                ),
            });
        }

        Ok(Self {
            players: [first, second],
            move_delay: Duration::ZERO,
        })
    }

    /// Pause before each computer move so a human can follow the game.
    pub fn with_move_delay(mut self, delay: Duration) -> Self {
        self.move_delay = delay;
        self
    }

    /// Play from the empty board until somebody wins or the board fills up.
    ///
    /// An illegal proposal is rejected without touching the board and the same
    /// agent is asked again.
    ///
    /// # Errors
    ///
    /// - [`Error::NoValidMoves`] if an agent declines to move on a non-full board
    /// - [`Error::InvalidConfiguration`] after more than [`MAX_REJECTED_MOVES`]
    ///   consecutive illegal proposals
    /// - any error raised by an agent or the observer
    pub fn play(&mut self, observer: &mut dyn GameObserver) -> Result<GameRecord> {
        let mut board = Board::new();
        observer.on_start(&board)?;

        let mut moves: Vec<Move> = Vec::with_capacity(9);
        let mut turn = 0;
        let mut rejected = 0;
        let mut victory = false;

        while moves.len() < 9 && !victory {
            let agent = &mut self.players[turn];
            if !agent.is_interactive() && !self.move_delay.is_zero() {
                thread::sleep(self.move_delay);
            }

            let player = agent.player();
            let position = agent.select_move(&board)?.ok_or(Error::NoValidMoves)?;

            match board.apply(player, position) {
                Ok(won) => victory = won,
                Err(err) if err.is_invalid_move() => {
                    rejected += 1;
                    warn!("{} proposed an illegal move: {err}", agent.name());
                    if rejected > MAX_REJECTED_MOVES {
                        return Err(Error::InvalidConfiguration {
                            message: format!(
                                "agent '{}' proposed {rejected} illegal moves in a row",
                                agent.name()
                            ),
                        });
                    }
                    continue;
                }
                Err(err) => return Err(err),
            }

            rejected = 0;
            let mv = Move { position, player };
            moves.push(mv);
            observer.on_move(&board, mv)?;
            turn = 1 - turn;
        }

        // the last mover completed the line
        let outcome = match moves.last() {
            Some(last) if victory => GameOutcome::Win(last.player),
            _ => GameOutcome::Draw,
        };

        let record = GameRecord {
            moves,
            outcome,
            board,
        };
        info!("{}", record.summary());
        observer.on_finish(&board, &record)?;
        Ok(record)
    }
}
