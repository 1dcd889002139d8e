//! Behaviour of the minimax engine on known positions and in self-play

use noughts::{
    Board, Cell, Player, SearchEngine,
    players::{RandomPlayer, SearchPlayer},
    ports::{Agent, SilentObserver},
    search::WIN_SCORE,
    tictactoe::{Game, GameOutcome},
};

fn cells(s: &str) -> [Cell; 9] {
    Board::from_string(s).unwrap().cells()
}

mod scenarios {
    use super::*;

    #[test]
    fn empty_board_full_search_opens_in_first_corner() {
        let report = SearchEngine::full().evaluate(&[Cell::Empty; 9], Player::O);
        assert_eq!(report.position, Some(0));
        assert_eq!(report.score, 0, "perfect play from the empty board is a draw");
    }

    #[test]
    fn blocks_immediate_threat() {
        // X X .
        // . O .
        // . . .
        let snapshot = cells("XX. .O. ...");
        for depth in 2..=9 {
            let engine = SearchEngine::new(depth).unwrap();
            assert_eq!(
                engine.choose_move(&snapshot, Player::O),
                Some(2),
                "depth {depth} failed to block"
            );
        }
    }

    #[test]
    fn one_ply_follows_the_static_table() {
        // With a single ply every reply is rated statically. The table scores a
        // lone opponent mark at -200 but an opponent pair at only -20, so the
        // block at 2 (40) loses to 6, which opens the anti-diagonal pair (220).
        let snapshot = cells("XX. .O. ...");
        let report = SearchEngine::new(1).unwrap().evaluate(&snapshot, Player::O);
        assert_eq!(report.position, Some(6));
        assert_eq!(report.score, 220);
    }

    #[test]
    fn own_win_beats_blocking() {
        // O O .
        // X X .
        // . . .
        let snapshot = cells("OO. XX. ...");
        for depth in 1..=9 {
            let report = SearchEngine::new(depth)
                .unwrap()
                .evaluate(&snapshot, Player::O);
            assert_eq!(report.position, Some(2));
            assert_eq!(report.score, WIN_SCORE);
        }
    }

    #[test]
    fn full_board_has_no_legal_move() {
        // X O X
        // X O O
        // O X X
        let snapshot = cells("XOX XOO OXX");
        assert_eq!(SearchEngine::full().choose_move(&snapshot, Player::X), None);
        assert_eq!(SearchEngine::full().choose_move(&snapshot, Player::O), None);
    }

    #[test]
    fn rejected_moves_leave_board_alone() {
        let mut board = Board::new();
        board.apply(Player::O, 4).unwrap();
        let before = board;

        let err = board.apply(Player::X, 9).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(board, before);

        let err = board.apply(Player::X, 4).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(board, before);
    }
}

mod exhaustive {
    use super::*;

    #[test]
    fn self_play_at_full_depth_draws() {
        let mut board = Board::new();
        let engine = SearchEngine::full();
        let mut player = Player::X;

        while let Some(pos) = engine.choose_move(&board.cells(), player) {
            let won = board.apply(player, pos).unwrap();
            assert!(!won, "{player} won against perfect play:\n{board}");
            player = player.opponent();
        }

        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn full_search_never_loses_to_random() {
        for seed in 0..6 {
            for search_opens in [true, false] {
                let search: Box<dyn Agent> =
                    Box::new(SearchPlayer::new(Player::O, SearchEngine::full()));
                let random: Box<dyn Agent> = Box::new(RandomPlayer::with_seed(Player::X, seed));
                let mut game = if search_opens {
                    Game::new(search, random).unwrap()
                } else {
                    Game::new(random, search).unwrap()
                };

                let record = game.play(&mut SilentObserver).unwrap();
                assert_ne!(
                    record.outcome,
                    GameOutcome::Win(Player::X),
                    "seed {seed}: lost to random play, moves {:?}",
                    record.moves
                );
            }
        }
    }

    #[test]
    fn takes_forced_win_after_blunder() {
        // X opened in the corner, O answered on an edge; X can force a win
        // X O .
        // . . .
        // . . .
        let report = SearchEngine::full().evaluate(&cells("XO. ... ..."), Player::X);
        assert_eq!(report.score, WIN_SCORE);
        assert!(report.position.is_some());
    }
}
