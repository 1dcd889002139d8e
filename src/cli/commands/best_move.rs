//! Best-move command - ask the engine about a single position

use anyhow::Result;
use clap::Parser;

use super::parse_player_token;
use crate::{
    app::config::validate_depth,
    cli::output::{print_kv, print_section},
    search::{FULL_DEPTH, SearchEngine},
    tictactoe::{Board, Cell, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the move the engine picks for a position")]
pub struct BestMoveArgs {
    /// Board as 9 cells in row-major order: X, O and . for empty (spaces ignored)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the piece counts when omitted
    #[arg(long, short = 'p')]
    pub player: Option<String>,

    /// Plies to search
    #[arg(long, short = 'd', default_value_t = FULL_DEPTH)]
    pub depth: usize,

    /// Print the search report as JSON
    #[arg(long)]
    pub json: bool,
}

/// X moves when both sides have placed the same number of symbols
pub fn side_to_move(board: &Board) -> Player {
    let count = |cell: Cell| (0..9).filter(|&pos| board.get(pos) == cell).count();
    if count(Cell::X) <= count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Engine for a user-supplied depth, held to the same 1-9 range as match configs
pub fn engine_for_depth(depth: usize) -> crate::Result<SearchEngine> {
    validate_depth(depth)?;
    SearchEngine::new(depth)
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let player = match args.player {
        Some(ref value) => parse_player_token(value, "--player")?,
        None => side_to_move(&board),
    };
    let engine = engine_for_depth(args.depth)?;
    let report = engine.evaluate(&board.cells(), player);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", board.render(false));

    print_section("Search");
    print_kv("Player", &player.to_string());
    print_kv("Depth", &engine.max_depth().to_string());
    match report.position {
        Some(position) => print_kv("Move", &format!("{} (index {position})", position + 1)),
        None => print_kv("Move", "No legal move"),
    }
    print_kv("Score", &report.score.to_string());
    print_kv("Nodes", &report.nodes.to_string());
    print_kv("Cutoffs", &report.cutoffs.to_string());

    Ok(())
}
