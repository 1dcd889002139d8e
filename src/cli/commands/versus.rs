//! Match command - computer agents playing each other

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    app::ComputerSpec,
    cli::output::{format_share, print_kv, print_section},
    ports::SilentObserver,
    tictactoe::{Game, GameOutcome, GameRecord, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play computer agents against each other")]
pub struct MatchArgs {
    /// Agent playing X, which always opens (random, easy, medium, hard, search:<depth>)
    #[arg(long, default_value = "hard")]
    pub x: String,

    /// Agent playing O
    #[arg(long, default_value = "random")]
    pub o: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the summary and every game to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Tally of a series of games
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub x: String,
    pub o: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub records: Vec<GameRecord>,
}

/// Play `games` games with X opening each one.
///
/// With a seed, game `i` seeds X with `seed + 2i` and O with `seed + 2i + 1`,
/// so a series is reproducible game by game.
pub fn run_match(
    x: ComputerSpec,
    o: ComputerSpec,
    games: usize,
    seed: Option<u64>,
) -> crate::Result<MatchSummary> {
    let mut summary = MatchSummary {
        x: x.to_string(),
        o: o.to_string(),
        games,
        x_wins: 0,
        o_wins: 0,
        draws: 0,
        records: Vec::with_capacity(games),
    };

    for game_num in 0..games {
        let game_seed = seed.map(|s| s.wrapping_add(2 * game_num as u64));
        let x_agent = x.build(Player::X, game_seed)?;
        let o_agent = o.build(Player::O, game_seed.map(|s| s.wrapping_add(1)))?;

        let record = Game::new(x_agent, o_agent)?.play(&mut SilentObserver)?;
        match record.outcome {
            GameOutcome::Win(Player::X) => summary.x_wins += 1,
            GameOutcome::Win(Player::O) => summary.o_wins += 1,
            GameOutcome::Draw => summary.draws += 1,
        }
        info!("game {}: {:?}", game_num + 1, record.outcome);
        summary.records.push(record);
    }

    Ok(summary)
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let x: ComputerSpec = args.x.parse()?;
    let o: ComputerSpec = args.o.parse()?;

    print_section("Match");
    print_kv("X", &x.to_string());
    print_kv("O", &o.to_string());
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let summary = run_match(x, o, args.games, args.seed)?;

    print_section("Results");
    print_kv("X wins", &format_share(summary.x_wins, summary.games));
    print_kv("O wins", &format_share(summary.o_wins, summary.games));
    print_kv("Draws", &format_share(summary.draws, summary.games));

    if let Some(path) = &args.export {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
