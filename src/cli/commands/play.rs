//! Play command - menu-driven games at the terminal

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};

use crate::{
    Error,
    app::{Difficulty, GameMode, MatchConfig},
    cli::output::ConsoleObserver,
    players::{HumanPlayer, LineSource},
    ports::Agent,
    tictactoe::{Game, Player},
};

/// Who opens a game against the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opener {
    Human,
    Computer,
}

#[derive(Parser, Debug, Default)]
#[command(about = "Play against a friend or the computer")]
pub struct PlayArgs {
    /// JSON match configuration; when given, the menu is skipped
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Opponent kind (asked when omitted)
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Computer strength (asked when omitted)
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Who opens against the computer (asked when omitted)
    #[arg(long, value_enum)]
    pub first: Option<Opener>,

    /// Random seed for the easy opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Play a single game instead of offering a rematch
    #[arg(long)]
    pub once: bool,
}

/// Numbered menus over a line source
pub struct Menu<L, W> {
    input: L,
    output: W,
}

impl<L: LineSource, W: Write> Menu<L, W> {
    pub fn new(input: L, output: W) -> Self {
        Self { input, output }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print lines of text
    pub fn say(&mut self, lines: &[&str]) -> crate::Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Ask until a number between 1 and `options` is typed, and return it.
    ///
    /// # Errors
    ///
    /// [`Error::InputClosed`] at end of input.
    pub fn choose(&mut self, options: usize) -> crate::Result<usize> {
        let numbers: Vec<String> = (1..=options).map(|n| n.to_string()).collect();
        let prompt = numbers.join("/");
        let expected = match numbers.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
            _ => numbers.join(""),
        };

        loop {
            write!(self.output, "{prompt}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            if let Ok(choice) = line.trim().parse::<usize>()
                && (1..=options).contains(&choice)
            {
                return Ok(choice);
            }
            writeln!(self.output, "Invalid input, please enter {expected}.")?;
        }
    }
}

/// Fill in the match settings: flags first, then the menu for anything left.
pub fn resolve_config<L: LineSource, W: Write>(
    menu: &mut Menu<L, W>,
    base: Option<&MatchConfig>,
    args: &PlayArgs,
) -> crate::Result<MatchConfig> {
    let mut config = match base {
        Some(config) => config.clone(),
        None => {
            let mut config = MatchConfig::default();

            config.mode = match args.mode {
                Some(mode) => mode,
                None => {
                    menu.say(&[
                        "Do you want to: ",
                        "  1 - Play against a friend",
                        "  2 - Play against the computer",
                    ])?;
                    if menu.choose(2)? == 1 {
                        GameMode::Friend
                    } else {
                        GameMode::Computer
                    }
                }
            };

            if config.mode == GameMode::Computer {
                config.difficulty = match args.difficulty {
                    Some(difficulty) => difficulty,
                    None => {
                        menu.say(&[
                            "Choose the difficulty",
                            "  1 - Easy",
                            "  2 - Medium",
                            "  3 - Difficult",
                        ])?;
                        match menu.choose(3)? {
                            1 => Difficulty::Easy,
                            2 => Difficulty::Medium,
                            _ => Difficulty::Hard,
                        }
                    }
                };

                config.human_first = match args.first {
                    Some(opener) => opener == Opener::Human,
                    None => {
                        menu.say(&["Do you want to: ", "  1 - Go first", "  2 - Go second"])?;
                        menu.choose(2)? == 1
                    }
                };
            }
            config
        }
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.move_delay_ms = delay_ms;
    }
    config.validate()?;
    Ok(config)
}

/// Play games until the user declines a rematch.
///
/// Humans are created by `make_human`, so tests can script their input.
pub fn run_session<L, W, F>(
    args: &PlayArgs,
    base: Option<&MatchConfig>,
    menu: &mut Menu<L, W>,
    mut make_human: F,
) -> crate::Result<()>
where
    L: LineSource,
    W: Write,
    F: FnMut(Player) -> Box<dyn Agent>,
{
    loop {
        let config = resolve_config(menu, base, args)?;
        let [first, second] = config.build_players_with(&mut make_human)?;
        let mut game = Game::new(first, second)?.with_move_delay(config.move_delay());

        let mut observer = ConsoleObserver::new(menu.output_mut());
        game.play(&mut observer)?;

        if args.once {
            return Ok(());
        }

        menu.say(&["Do you want to play again?", "  1 - Yes", "  2 - No"])?;
        if menu.choose(2)? == 2 {
            menu.say(&["See you soon!"])?;
            return Ok(());
        }
    }
}

pub fn execute(args: PlayArgs) -> anyhow::Result<()> {
    let base = args.config.as_ref().map(MatchConfig::load).transpose()?;
    let mut menu = Menu::new(io::stdin(), io::stdout());

    match run_session(&args, base.as_ref(), &mut menu, |player| {
        Box::new(HumanPlayer::stdio(player))
    }) {
        Ok(()) | Err(Error::InputClosed) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
