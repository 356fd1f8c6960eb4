//! Search and difficulty-policy integration tests.

use proptest::prelude::*;
use ttt_engine::core::{Board, Mark};
use ttt_engine::rules::{reachable_positions, Outcome};
use ttt_engine::search::{Difficulty, Engine, Minimax, ScoredMove, Scoring, SearchConfig};
use ttt_engine::session::play_out;
use tracing_subscriber::EnvFilter;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Run `f` with engine logs routed to the test writer.
///
/// `RUST_LOG` overrides the default `ttt_engine=debug` filter. The
/// subscriber is scoped to this thread, so parallel tests don't clash.
fn traced<T>(f: impl FnOnce() -> T) -> T {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ttt_engine=debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

fn plain() -> Minimax {
    Minimax::new(SearchConfig::default().with_alpha_beta(false))
}

fn pruned() -> Minimax {
    Minimax::new(SearchConfig::default())
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_empty_board_value_is_draw() {
    let mut engine = Engine::default();
    let best = engine.find_best_move(&Board::new()).unwrap();

    assert!(best.location < 9);
    assert_eq!(best.score, 0);
    assert_eq!(engine.best_move(&Board::new(), Difficulty::Hard), Some(best.location));
}

#[test]
fn test_takes_immediate_win() {
    let b = board("XX.|OO.|...");
    assert_eq!(b.turn(), Mark::X);

    traced(|| {
        let mut engine = Engine::default();
        assert_eq!(engine.best_move(&b, Difficulty::Medium), Some(2));
        assert_eq!(engine.best_move(&b, Difficulty::Hard), Some(2));
    });
}

#[test]
fn test_won_board_is_not_searched() {
    // X has three in a row; O still has four empty cells.
    let won = board("XXX|OO.|...");
    assert_eq!(won.winner(), Some(Mark::X));
    assert_eq!(won.legal_moves().len(), 4);

    traced(|| {
        let mut engine = Engine::default();
        assert_eq!(engine.find_best_move(&won), None);
        assert!(engine.score_moves(&won).is_empty());
        assert_eq!(engine.best_move(&won, Difficulty::Hard), None);
    });
}

#[test]
fn test_blocks_immediate_loss() {
    let b = board("OO.|X..|...");
    assert_eq!(b.turn(), Mark::X);

    let mut engine = Engine::default();
    assert_eq!(engine.best_move(&b, Difficulty::Medium), Some(2));

    // The position is lost for X whatever it does; Hard still blocks,
    // which is the slowest loss and the best score available.
    let scores = engine.score_moves(&b);
    let best_score = scores.iter().map(|m| m.score).max().unwrap();
    let hard = engine.best_move(&b, Difficulty::Hard).unwrap();

    assert_eq!(hard, 2);
    assert_eq!(
        scores.iter().find(|m| m.location == hard).map(|m| m.score),
        Some(best_score)
    );
}

#[test]
fn test_hard_completes_fork() {
    // X holds two open lines through 2 and 6; either wins at once.
    let b = board("XX.|XOO|..O");
    let mut engine = Engine::default();
    assert_eq!(
        engine.find_best_move(&b),
        Some(ScoredMove { location: 2, score: 9 })
    );
}

#[test]
fn test_medium_falls_back_to_random() {
    // Nothing to win or block for O here.
    let b = board("X..|.O.|..X");
    let mut engine = Engine::default();
    let choice = engine.best_move(&b, Difficulty::Medium).unwrap();
    assert!(b.legal_moves().contains(&choice));
}

// =============================================================================
// Alpha-Beta Equivalence
// =============================================================================

#[test]
fn test_pruning_never_changes_the_choice() {
    let mut a = pruned();
    let mut b = plain();

    for position in reachable_positions() {
        if position.is_terminal() {
            continue;
        }
        assert_eq!(
            a.find_best_move(&position),
            b.find_best_move(&position),
            "{position}"
        );
    }
}

#[test]
fn test_pruning_matches_flat_scoring_too() {
    let mut a = Minimax::new(SearchConfig::default().with_scoring(Scoring::Flat));
    let mut b = Minimax::new(
        SearchConfig::default()
            .with_scoring(Scoring::Flat)
            .with_alpha_beta(false),
    );

    for position in reachable_positions().into_iter().filter(|p| p.empty_count() <= 6) {
        if position.is_terminal() {
            continue;
        }
        assert_eq!(a.score_moves(&position), b.score_moves(&position), "{position}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pruned_score_equals_plain_best(choices in prop::collection::vec(0usize..9, 1..8)) {
        let mut position = Board::new();
        for choice in choices {
            if position.is_terminal() {
                break;
            }
            let moves = position.legal_moves();
            position = position.play(moves[choice % moves.len()]).unwrap();
        }
        prop_assume!(!position.is_terminal());

        let best = pruned().find_best_move(&position).unwrap();
        let plain_best = plain()
            .score_moves(&position)
            .into_iter()
            .map(|m| m.score)
            .max()
            .unwrap();
        prop_assert_eq!(best.score, plain_best);
    }
}

#[test]
fn test_finished_positions_have_no_scores() {
    let mut searchers = [plain(), pruned()];

    for position in reachable_positions().into_iter().filter(Board::is_terminal) {
        for minimax in &mut searchers {
            assert_eq!(minimax.find_best_move(&position), None, "{position}");
            assert!(minimax.score_moves(&position).is_empty(), "{position}");
        }
    }
}

// =============================================================================
// Hard Is Never Beaten
// =============================================================================

#[test]
fn test_hard_vs_hard_draws() {
    let mut engine = Engine::default();
    let hard = Difficulty::Hard.policy();

    let end = play_out(Board::new(), hard, hard, &mut engine).unwrap();
    assert_eq!(end.outcome(), Some(Outcome::Draw));
}

/// Walk every opponent reply; Hard answers with its deterministic choice.
fn assert_hard_never_loses(position: Board, hard: Mark, minimax: &mut Minimax) {
    if let Some(outcome) = position.outcome() {
        assert!(!outcome.is_winner(hard.opponent()), "Hard lost:\n{position}");
        return;
    }

    if position.turn() == hard {
        let best = minimax.find_best_move(&position).unwrap();
        let next = position.play(best.location).unwrap();
        assert_hard_never_loses(next, hard, minimax);
    } else {
        for location in position.legal_moves() {
            let next = position.play(location).unwrap();
            assert_hard_never_loses(next, hard, minimax);
        }
    }
}

#[test]
fn test_hard_never_loses_as_x() {
    assert_hard_never_loses(Board::new(), Mark::X, &mut pruned());
}

#[test]
fn test_hard_never_loses_as_o() {
    assert_hard_never_loses(Board::new(), Mark::O, &mut pruned());
}

#[test]
fn test_hard_beats_or_draws_weaker_levels() {
    for seed in 0..20 {
        let mut engine = Engine::new(SearchConfig::default().with_seed(seed));
        let hard = Difficulty::Hard.policy();

        for weaker in [Difficulty::Easy, Difficulty::Medium] {
            let as_x = play_out(Board::new(), hard, weaker.policy(), &mut engine).unwrap();
            assert!(!as_x.outcome().unwrap().is_winner(Mark::O));

            let as_o = play_out(Board::new(), weaker.policy(), hard, &mut engine).unwrap();
            assert!(!as_o.outcome().unwrap().is_winner(Mark::X));
        }
    }
}

// =============================================================================
// Medium Policy
// =============================================================================

#[test]
fn test_medium_wins_or_blocks_everywhere() {
    let mut engine = Engine::default();

    for position in reachable_positions() {
        if position.is_terminal() {
            continue;
        }
        let choice = engine.best_move(&position, Difficulty::Medium).unwrap();
        let wins = position.winning_moves(position.turn());
        let threats = position.winning_moves(position.opponent());

        if !wins.is_empty() {
            assert!(wins.contains(&choice), "{position}");
            assert!(position.play(choice).unwrap().is_win());
        } else if !threats.is_empty() {
            assert!(threats.contains(&choice), "{position}");
        } else {
            assert!(position.legal_moves().contains(&choice));
        }
    }
}

// =============================================================================
// Easy Policy
// =============================================================================

#[test]
fn test_easy_spreads_over_legal_moves() {
    let mut engine = Engine::new(SearchConfig::default().with_seed(3));
    let mut seen = [false; 9];

    for _ in 0..500 {
        if let Some(location) = engine.best_move(&Board::new(), Difficulty::Easy) {
            seen[location] = true;
        }
    }

    assert!(seen.iter().all(|&s| s));
}
