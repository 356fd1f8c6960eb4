//! Board invariants over every reachable position and random play.

use proptest::prelude::*;
use ttt_engine::core::{Board, BoardError, Cell, Mark};
use ttt_engine::rules::{reachable_positions, Outcome};

/// Play a sequence of choices, each taken modulo the legal move count.
fn play_choices(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_moves();
        board = board.play(moves[choice % moves.len()]).unwrap();
    }
    board
}

// =============================================================================
// Exhaustive Invariants
// =============================================================================

#[test]
fn test_moves_plus_filled_is_nine() {
    for board in reachable_positions() {
        let filled = board.cells().iter().filter(|c| !c.is_empty()).count();
        assert_eq!(board.legal_moves().len() + filled, 9, "{board}");
    }
}

#[test]
fn test_win_and_draw_exclusive() {
    for board in reachable_positions() {
        assert!(!(board.is_win() && board.is_draw()), "{board}");
        if board.is_draw() {
            assert!(board.legal_moves().is_empty());
        }
    }
}

#[test]
fn test_mark_balance() {
    for board in reachable_positions() {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        assert!(x == o || x == o + 1, "{board}");

        let expected_turn = if x == o { Mark::X } else { Mark::O };
        assert_eq!(board.turn(), expected_turn);
    }
}

#[test]
fn test_last_move_is_filled() {
    for board in reachable_positions() {
        match board.last_move() {
            Some(location) => {
                assert_eq!(board.cell(location).and_then(Cell::mark), Some(board.opponent()));
            }
            None => assert_eq!(board, Board::new()),
        }
    }
}

#[test]
fn test_only_last_mover_can_have_won() {
    for board in reachable_positions() {
        if let Some(winner) = board.winner() {
            assert_eq!(winner, board.opponent(), "{board}");
            assert_eq!(board.outcome(), Some(Outcome::Winner(winner)));
        }
    }
}

#[test]
fn test_every_legal_move_applies_and_every_other_fails() {
    let board: Board = "XO.|.X.|..O".parse().unwrap();
    let legal = board.legal_moves();

    for location in 0..12 {
        let result = board.play(location);
        if legal.contains(&location) {
            assert!(result.is_ok());
        } else if location < 9 {
            assert_eq!(result, Err(BoardError::Occupied { location }));
        } else {
            assert_eq!(result, Err(BoardError::OutOfRange { location }));
        }
    }
}

// =============================================================================
// Random Play
// =============================================================================

proptest! {
    #[test]
    fn prop_play_is_deterministic(choices in prop::collection::vec(0usize..9, 0..9)) {
        let a = play_choices(&choices);
        let b = play_choices(&choices);
        prop_assert_eq!(a, b);

        for location in a.legal_moves() {
            prop_assert_eq!(a.play(location), a.play(location));
        }
    }

    #[test]
    fn prop_play_fills_exactly_one_cell(choices in prop::collection::vec(0usize..9, 0..8)) {
        let board = play_choices(&choices);
        prop_assume!(!board.is_terminal());

        for location in board.legal_moves() {
            let next = board.play(location).unwrap();
            prop_assert_eq!(next.empty_count() + 1, board.empty_count());
            prop_assert_eq!(next.turn(), board.opponent());
            prop_assert_eq!(next.last_move(), Some(location));
            prop_assert_eq!(next.cell(location), Some(Cell::from(board.turn())));

            for other in (0..9).filter(|&i| i != location) {
                prop_assert_eq!(next.cell(other), board.cell(other));
            }
        }
    }

    #[test]
    fn prop_display_parses_back(choices in prop::collection::vec(0usize..9, 0..9)) {
        let board = play_choices(&choices);
        let parsed: Board = board.to_string().parse().unwrap();
        prop_assert_eq!(parsed.cells(), board.cells());
        prop_assert_eq!(parsed.turn(), board.turn());
    }
}
