//! Uniformly random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Picks any empty cell with equal probability
pub struct RandomPlayer {
    player: Player,
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(player: Player) -> Self {
        Self::with_seed(player, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            name: format!("Random ({player})"),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomPlayer {
    fn select_move(&mut self, board: &Board) -> Result<Option<usize>> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Ok(None);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(Some(moves[index]))
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_cells() {
        let board = Board::from_string("XOXOX.OX.").unwrap();
        let mut player = RandomPlayer::with_seed(Player::O, 7);
        for _ in 0..50 {
            let pos = player.select_move(&board).unwrap().unwrap();
            assert!(pos == 5 || pos == 8);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomPlayer::with_seed(Player::X, 42);
        let mut b = RandomPlayer::with_seed(Player::X, 42);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board).unwrap(),
                b.select_move(&board).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let mut player = RandomPlayer::with_seed(Player::X, 1);
        assert_eq!(player.select_move(&board).unwrap(), None);
    }
}
