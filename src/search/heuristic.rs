//! Static evaluation for positions where the search runs out of depth

use crate::tictactoe::{Cell, LineAnalyzer, Player, WINNING_LINES};

/// Score of a single line given the searcher's marks and the empty cells in it.
///
/// Lines holding any opponent mark fall into the entries with
/// `own + blank < 3`. `(3, 0)` and `(0, 0)` are completed lines, which the
/// terminal checks catch before evaluation, so they have no entry.
pub const fn line_score(own: usize, blank: usize) -> Option<i32> {
    match (own, blank) {
        (2, 1) => Some(200),
        (1, 2) => Some(20),
        (0, 3) => Some(0),
        (1, 1) => Some(0),
        (2, 0) => Some(0),
        (1, 0) => Some(0),
        (0, 1) => Some(-20),
        (0, 2) => Some(-200),
        _ => None,
    }
}

/// Sum of [`line_score`] over all eight lines, from `me`'s point of view.
pub fn rate_board(cells: &[Cell; 9], me: Player) -> i32 {
    WINNING_LINES
        .iter()
        .map(|line| {
            let count = LineAnalyzer::count(cells, me, line);
            debug_assert!(
                line_score(count.own, count.blank).is_some(),
                "completed line {line:?} reached static evaluation"
            );
            line_score(count.own, count.blank).unwrap_or(0)
        })
        .sum()
}
