//! Depth-bounded minimax with single-bound pruning

use log::debug;
use serde::{Deserialize, Serialize};

use super::heuristic::rate_board;
use crate::{
    Error, Result,
    tictactoe::{Cell, LineAnalyzer, Player},
};

/// Score of a position where the searcher has three in a row
pub const WIN_SCORE: i32 = 10_000;

/// Every score lies strictly between these sentinels.
pub const MIN_SCORE: i32 = -20_000;
pub const MAX_SCORE: i32 = 20_000;

/// Depth used by the hardest computer opponent
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Depth at which the whole game tree is searched
pub const FULL_DEPTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The searcher picks
    Maximize,
    /// The opponent picks
    Minimize,
}

impl Phase {
    fn next(self) -> Phase {
        match self {
            Phase::Maximize => Phase::Minimize,
            Phase::Minimize => Phase::Maximize,
        }
    }

    /// Whether `candidate` is strictly better than `current` for the side picking
    fn improves(self, candidate: i32, current: i32) -> bool {
        match self {
            Phase::Maximize => candidate > current,
            Phase::Minimize => candidate < current,
        }
    }
}

/// Result of one top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen cell, `None` when the position has no legal move or is already decided
    pub position: Option<usize>,
    /// Root score from the searcher's point of view
    pub score: i32,
    /// Positions visited, the root included
    pub nodes: usize,
    /// Scans stopped early by the inherited bound
    pub cutoffs: usize,
}

/// Minimax search over a 3x3 snapshot.
///
/// Scores are +[`WIN_SCORE`] / -[`WIN_SCORE`] for decided positions, 0 for a
/// full board and the static heuristic once `max_depth` plies have been
/// played. Each node inherits a single bound: the best score its parent has
/// secured so far. A node stops scanning as soon as its own best passes that
/// bound, since the parent would never pick it. Ties keep the lowest cell.
///
/// # Examples
///
/// ```
/// use noughts::{SearchEngine, tictactoe::{Board, Player}};
///
/// let board = Board::from_string("OO. XX. ...").unwrap();
/// let engine = SearchEngine::new(6).unwrap();
/// assert_eq!(engine.choose_move(&board.cells(), Player::O), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    max_depth: usize,
}

impl SearchEngine {
    /// Create an engine looking `max_depth` plies ahead.
    ///
    /// # Errors
    ///
    /// A depth of 0 would evaluate the root statically and never pick a move,
    /// so it is rejected with [`Error::InvalidConfiguration`].
    pub fn new(max_depth: usize) -> Result<Self> {
        if max_depth == 0 {
            return Err(Error::InvalidConfiguration {
                message: "search depth must be at least 1".to_string(),
            });
        }
        Ok(Self { max_depth })
    }

    /// Engine that searches the whole game tree
    pub fn full() -> Self {
        Self {
            max_depth: FULL_DEPTH,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Best cell for `me` to occupy, or `None` if there is no legal move.
    ///
    /// `cells` is only read; the search works on its own copy.
    pub fn choose_move(&self, cells: &[Cell; 9], me: Player) -> Option<usize> {
        self.evaluate(cells, me).position
    }

    /// Run the search and report the chosen move with its score and counters.
    pub fn evaluate(&self, cells: &[Cell; 9], me: Player) -> SearchReport {
        let mut search = Search {
            cells: *cells,
            me,
            opponent: me.opponent(),
            max_depth: self.max_depth,
            nodes: 0,
            cutoffs: 0,
        };
        let (score, position) = search.rate(MAX_SCORE, 0, Phase::Maximize);
        debug_assert_eq!(&search.cells, cells, "search left its buffer modified");

        debug!(
            "search for {me} at depth {}: move {position:?}, score {score}, {} nodes, {} cutoffs",
            self.max_depth, search.nodes, search.cutoffs
        );

        SearchReport {
            position,
            score,
            nodes: search.nodes,
            cutoffs: search.cutoffs,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// State of one top-level call.
///
/// `cells` is private to the call and mutated in place: every placement is
/// undone before the next sibling is tried, so the buffer is back to the root
/// snapshot whenever `rate` returns.
struct Search {
    cells: [Cell; 9],
    me: Player,
    opponent: Player,
    max_depth: usize,
    nodes: usize,
    cutoffs: usize,
}

impl Search {
    fn rate(&mut self, bound: i32, depth: usize, phase: Phase) -> (i32, Option<usize>) {
        self.nodes += 1;

        if LineAnalyzer::has_won(&self.cells, self.me) {
            return (WIN_SCORE, None);
        }
        if LineAnalyzer::has_won(&self.cells, self.opponent) {
            return (-WIN_SCORE, None);
        }
        if depth == self.max_depth {
            return (rate_board(&self.cells, self.me), None);
        }
        if !self.cells.contains(&Cell::Empty) {
            return (0, None);
        }

        let (symbol, mut best) = match phase {
            Phase::Maximize => (self.me.to_cell(), MIN_SCORE),
            Phase::Minimize => (self.opponent.to_cell(), MAX_SCORE),
        };
        let mut best_position = None;

        for pos in 0..9 {
            if self.cells[pos] != Cell::Empty {
                continue;
            }

            self.cells[pos] = symbol;
            let (score, _) = self.rate(best, depth + 1, phase.next());
            self.cells[pos] = Cell::Empty;

            if phase.improves(score, best) {
                best = score;
                best_position = Some(pos);
                if phase.improves(best, bound) {
                    self.cutoffs += 1;
                    break;
                }
            }
        }

        (best, best_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn cells(s: &str) -> [Cell; 9] {
        Board::from_string(s).unwrap().cells()
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert!(SearchEngine::new(0).is_err());
        assert_eq!(SearchEngine::new(1).unwrap().max_depth(), 1);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let report = SearchEngine::full().evaluate(&cells("XOX XOO OXX"), Player::O);
        assert_eq!(report.position, None);
        assert_eq!(report.score, 0);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let report = SearchEngine::full().evaluate(&cells("XXX OO. ..."), Player::O);
        assert_eq!(report.position, None);
        assert_eq!(report.score, -WIN_SCORE);
    }

    #[test]
    fn test_takes_immediate_win() {
        let report = SearchEngine::new(3)
            .unwrap()
            .evaluate(&cells("OO. XX. ..."), Player::O);
        assert_eq!(report.position, Some(2));
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_depth_one_uses_heuristic() {
        // every reply is rated statically; the best one leaves the most open pairs
        let snapshot = cells(".........");
        let report = SearchEngine::new(1).unwrap().evaluate(&snapshot, Player::X);
        // the centre touches four lines: 4 * (1,2) = 80
        assert_eq!(report.position, Some(4));
        assert_eq!(report.score, 80);
    }

    #[test]
    fn test_last_empty_cell() {
        // X O X
        // X O O
        // O X .
        let report = SearchEngine::full().evaluate(&cells("XOX XOO OX."), Player::X);
        assert_eq!(report.position, Some(8));
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_cutoffs_prune_nodes() {
        let report = SearchEngine::full().evaluate(&cells("........."), Player::X);
        assert!(report.cutoffs > 0);
        // 549,946 nodes in the unpruned game tree
        assert!(report.nodes < 549_946);
    }

    #[test]
    fn test_node_counts_follow_strict_cutoff() {
        // a cutoff only fires once the best strictly passes the parent's bound;
        // a non-strict or two-sided rule visits fewer nodes
        let empty = [Cell::Empty; 9];
        assert_eq!(SearchEngine::full().evaluate(&empty, Player::X).nodes, 222_609);
        assert_eq!(
            SearchEngine::full().evaluate(&cells("XO......."), Player::X).nodes,
            5_650
        );
        assert_eq!(
            SearchEngine::new(6).unwrap().evaluate(&empty, Player::X).nodes,
            14_991
        );
    }

    #[test]
    fn test_snapshot_untouched() {
        let snapshot = cells("X...O....");
        let before = snapshot;
        SearchEngine::full().choose_move(&snapshot, Player::X);
        assert_eq!(snapshot, before);
    }
}
