//! Application layer: match configuration and agent construction.
//!
//! [`MatchConfig`] is what the `play` command fills in from flags, a JSON file
//! or the interactive menu; it then builds the two agents in turn order.
//!
//! ```
//! use noughts::app::{Difficulty, GameMode, MatchConfig};
//! use noughts::players::RandomPlayer;
//!
//! let config = MatchConfig::new(GameMode::Computer).with_difficulty(Difficulty::Easy);
//! let [first, second] =
//!     config.build_players_with(|player| Box::new(RandomPlayer::with_seed(player, 1)))?;
//! assert_ne!(first.player(), second.player());
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;

pub use config::{
    ComputerSpec, DEFAULT_MOVE_DELAY_MS, Difficulty, GameMode, MEDIUM_DEPTH, MatchConfig,
};
