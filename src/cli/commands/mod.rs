//! Subcommands of the `noughts` binary

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod best_move;
pub mod play;
pub mod versus;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
