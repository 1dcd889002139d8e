//! Match configuration and agent construction.

use std::{fmt, path::Path, str::FromStr, time::Duration};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    players::{RandomPlayer, SearchPlayer},
    ports::Agent,
    search::DEFAULT_MAX_DEPTH,
    tictactoe::Player,
};

/// Depth of the medium computer opponent
pub const MEDIUM_DEPTH: usize = 2;

/// Think delay before each computer move in interactive play
pub const DEFAULT_MOVE_DELAY_MS: u64 = 300;

/// Who sits on the other side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans at one terminal
    Friend,
    /// A human against the computer
    Computer,
}

/// Strength of the computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random moves
    Easy,
    /// Shallow search
    Medium,
    /// Deep search
    Hard,
}

/// A computer agent description, as accepted on the command line.
///
/// `random`, `easy`, `medium`, `hard` or `search:<depth>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputerSpec {
    Random,
    Search { depth: usize },
}

impl ComputerSpec {
    /// Build the agent for `player`. A seed only affects the random variant.
    pub fn build(self, player: Player, seed: Option<u64>) -> Result<Box<dyn Agent>> {
        match self {
            ComputerSpec::Random => Ok(Box::new(match seed {
                Some(seed) => RandomPlayer::with_seed(player, seed),
                None => RandomPlayer::new(player),
            })),
            ComputerSpec::Search { depth } => {
                Ok(Box::new(SearchPlayer::with_depth(player, depth)?))
            }
        }
    }
}

impl FromStr for ComputerSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_ascii_lowercase();
        match value.as_str() {
            "random" | "easy" => Ok(ComputerSpec::Random),
            "medium" => Ok(ComputerSpec::Search {
                depth: MEDIUM_DEPTH,
            }),
            "hard" => Ok(ComputerSpec::Search {
                depth: DEFAULT_MAX_DEPTH,
            }),
            other => {
                let depth = other
                    .strip_prefix("search:")
                    .and_then(|d| d.parse::<usize>().ok())
                    .ok_or_else(|| Error::InvalidConfiguration {
                        message: format!(
                            "unknown agent '{s}' (expected random, easy, medium, hard or search:<depth>)"
                        ),
                    })?;
                validate_depth(depth)?;
                Ok(ComputerSpec::Search { depth })
            }
        }
    }
}

impl fmt::Display for ComputerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputerSpec::Random => write!(f, "random"),
            ComputerSpec::Search { depth } => write!(f, "search:{depth}"),
        }
    }
}

/// Search depths accepted from users: 1 to 9 plies
pub(crate) fn validate_depth(depth: usize) -> Result<()> {
    if (1..=9).contains(&depth) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            message: format!("search depth {depth} is outside 1-9"),
        })
    }
}

/// Configuration of an interactive match.
///
/// Loadable from JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use noughts::app::{Difficulty, GameMode, MatchConfig};
///
/// let config = MatchConfig::new(GameMode::Computer)
///     .with_difficulty(Difficulty::Medium)
///     .with_human_first(false)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Whether the human opens against the computer
    pub human_first: bool,
    /// Seed for the random opponent
    pub seed: Option<u64>,
    /// Search depth of the hard opponent
    pub hard_depth: usize,
    /// Pause before each computer move, in milliseconds
    pub move_delay_ms: u64,
}

impl MatchConfig {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            difficulty: Difficulty::Hard,
            human_first: true,
            seed: None,
            hard_depth: DEFAULT_MAX_DEPTH,
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hard_depth(mut self, depth: usize) -> Self {
        self.hard_depth = depth;
        self
    }

    pub fn with_move_delay_ms(mut self, delay_ms: u64) -> Self {
        self.move_delay_ms = delay_ms;
        self
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON or fails
    /// [`validate`](Self::validate).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: MatchConfig = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_depth(self.hard_depth)
    }

    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// The computer agent for the configured difficulty
    pub fn computer_spec(&self) -> ComputerSpec {
        match self.difficulty {
            Difficulty::Easy => ComputerSpec::Random,
            Difficulty::Medium => ComputerSpec::Search {
                depth: MEDIUM_DEPTH,
            },
            Difficulty::Hard => ComputerSpec::Search {
                depth: self.hard_depth,
            },
        }
    }

    /// Both agents in turn order, with humans created by `make_human`.
    ///
    /// Humans play X. Against the computer, the computer plays O and
    /// `human_first` decides who opens.
    pub fn build_players_with<F>(&self, mut make_human: F) -> Result<[Box<dyn Agent>; 2]>
    where
        F: FnMut(Player) -> Box<dyn Agent>,
    {
        self.validate()?;
        match self.mode {
            GameMode::Friend => Ok([make_human(Player::X), make_human(Player::O)]),
            GameMode::Computer => {
                let human = make_human(Player::X);
                let computer = self.computer_spec().build(Player::O, self.seed)?;
                if self.human_first {
                    Ok([human, computer])
                } else {
                    Ok([computer, human])
                }
            }
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(GameMode::Computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_computer_spec() {
        assert_eq!("random".parse::<ComputerSpec>().unwrap(), ComputerSpec::Random);
        assert_eq!("Easy".parse::<ComputerSpec>().unwrap(), ComputerSpec::Random);
        assert_eq!(
            "medium".parse::<ComputerSpec>().unwrap(),
            ComputerSpec::Search { depth: 2 }
        );
        assert_eq!(
            "hard".parse::<ComputerSpec>().unwrap(),
            ComputerSpec::Search { depth: 6 }
        );
        assert_eq!(
            "search:9".parse::<ComputerSpec>().unwrap(),
            ComputerSpec::Search { depth: 9 }
        );
        assert!("search:0".parse::<ComputerSpec>().is_err());
        assert!("search:x".parse::<ComputerSpec>().is_err());
        assert!("oracle".parse::<ComputerSpec>().is_err());
    }

    #[test]
    fn test_spec_display_roundtrips() {
        for spec in [ComputerSpec::Random, ComputerSpec::Search { depth: 4 }] {
            assert_eq!(spec.to_string().parse::<ComputerSpec>().unwrap(), spec);
        }
    }

    #[test]
    fn test_difficulty_mapping() {
        let config = MatchConfig::default();
        assert_eq!(
            config.clone().with_difficulty(Difficulty::Easy).computer_spec(),
            ComputerSpec::Random
        );
        assert_eq!(
            config.clone().with_difficulty(Difficulty::Medium).computer_spec(),
            ComputerSpec::Search { depth: 2 }
        );
        assert_eq!(
            config.with_hard_depth(9).computer_spec(),
            ComputerSpec::Search { depth: 9 }
        );
    }

    #[test]
    fn test_turn_order() {
        let human = |player| -> Box<dyn Agent> { Box::new(RandomPlayer::with_seed(player, 0)) };

        let config = MatchConfig::new(GameMode::Computer).with_human_first(false);
        let [first, second] = config.build_players_with(human).unwrap();
        assert_eq!(first.player(), Player::O);
        assert!(first.name().starts_with("Minimax depth 6"));
        assert_eq!(second.player(), Player::X);

        let config = MatchConfig::new(GameMode::Friend);
        let [first, second] = config.build_players_with(human).unwrap();
        assert_eq!(first.player(), Player::X);
        assert_eq!(second.player(), Player::O);
    }

    #[test]
    fn test_invalid_depth() {
        let config = MatchConfig::default().with_hard_depth(12);
        assert!(config.validate().is_err());
        assert!(
            config
                .build_players_with(|p| Box::new(RandomPlayer::with_seed(p, 0)))
                .is_err()
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{"mode": "friend", "move_delay_ms": 0}"#).unwrap();
        assert_eq!(config.mode, GameMode::Friend);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.move_delay(), Duration::ZERO);
        assert!(config.human_first);
    }
}
