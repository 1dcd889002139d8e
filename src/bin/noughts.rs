//! noughts CLI - tic-tac-toe against a friend or a minimax opponent
//!
//! Subcommands:
//! - `play`: interactive games driven by menus
//! - `best-move`: the engine's choice for one position
//! - `match`: computer agents playing a series of games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a minimax opponent", long_about = None)]
struct Cli {
    /// Log search details (same as RUST_LOG=debug)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a friend or the computer (default)
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show the move the engine picks for a position
    BestMove(noughts::cli::commands::best_move::BestMoveArgs),

    /// Play computer agents against each other
    #[command(name = "match")]
    Match(noughts::cli::commands::versus::MatchArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None => noughts::cli::commands::play::execute(Default::default()),
        Some(Commands::Play(args)) => noughts::cli::commands::play::execute(args),
        Some(Commands::BestMove(args)) => noughts::cli::commands::best_move::execute(args),
        Some(Commands::Match(args)) => noughts::cli::commands::versus::execute(args),
    }
}
