//! Computer player backed by the minimax engine

use crate::{
    Result,
    ports::Agent,
    search::SearchEngine,
    tictactoe::{Board, Player},
};

pub struct SearchPlayer {
    player: Player,
    name: String,
    engine: SearchEngine,
}

impl SearchPlayer {
    pub fn new(player: Player, engine: SearchEngine) -> Self {
        Self {
            player,
            name: format!("Minimax depth {} ({player})", engine.max_depth()),
            engine,
        }
    }

    /// Search player looking `max_depth` plies ahead
    pub fn with_depth(player: Player, max_depth: usize) -> Result<Self> {
        Ok(Self::new(player, SearchEngine::new(max_depth)?))
    }
}

impl Agent for SearchPlayer {
    fn select_move(&mut self, board: &Board) -> Result<Option<usize>> {
        Ok(self.engine.choose_move(&board.cells(), self.player))
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}
