//! Opponent strategy tests over many reachable positions.

use reverse_ttt::board::Board;
use reverse_ttt::core::{GameRng, Mark, RandomSource, ScriptedRng};
use reverse_ttt::opponent::{
    winning_cells, Bucket, Classification, LoseSeekingOpponent, OpponentStrategy,
};
use reverse_ttt::turn::RoleAssignment;

/// Random legal positions reached by alternating uniform moves, stopping
/// before anyone completes a line.
fn random_positions(seed: u64, games: usize) -> Vec<(Board, Mark)> {
    let mut rng = GameRng::new(seed);
    let mut positions = Vec::new();

    for _ in 0..games {
        let mut board = Board::standard();
        let mut mark = if rng.coin() { Mark::A } else { Mark::B };
        loop {
            positions.push((board.clone(), mark));
            let empty = board.empty_cells();
            let coord = empty[rng.pick_index(empty.len())];
            board.place(coord, mark).unwrap();
            if board.has_won(mark) || board.is_full() {
                break;
            }
            mark = mark.other();
        }
    }
    positions
}

// =============================================================================
// Selection Rules
// =============================================================================

#[test]
fn test_never_completes_own_line_unless_forced() {
    let mut rng = GameRng::new(99);

    for (board, opponent) in random_positions(1, 500) {
        let roles = RoleAssignment::with_human(opponent.other());
        let classification = Classification::of(&board, roles.human(), roles.opponent()).unwrap();
        let decision = LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap();
        let own_wins = winning_cells(&board, opponent).unwrap();

        if !classification.safe.is_empty() || !classification.defensive.is_empty() {
            assert!(
                !own_wins.contains(&decision.coord),
                "opponent took a winning cell {} with alternatives on\n{board}",
                decision.coord
            );
            assert!(!decision.relabel);
        } else {
            assert_eq!(decision.bucket, Bucket::Forced);
        }
    }
}

#[test]
fn test_decision_comes_from_best_bucket() {
    let mut rng = GameRng::new(5);

    for (board, opponent) in random_positions(2, 300) {
        let roles = RoleAssignment::with_human(opponent.other());
        let classification = Classification::of(&board, roles.human(), roles.opponent()).unwrap();
        let (best, cells) = classification.best().unwrap();
        let decision = LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap();

        assert_eq!(decision.bucket, best);
        assert!(cells.contains(&decision.coord));
        assert_eq!(classification.len(), board.remaining_empty_count());
    }
}

#[test]
fn test_tie_break_is_uniform() {
    let board = Board::standard();
    let roles = RoleAssignment::with_human(Mark::A);
    let mut rng = GameRng::new(17);
    let mut counts = [0usize; 9];
    let trials = 18_000;

    for _ in 0..trials {
        let decision = LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap();
        counts[decision.coord.index(3)] += 1;
    }

    let expected = trials as f64 / 9.0;
    for (index, count) in counts.iter().enumerate() {
        let ratio = *count as f64 / expected;
        assert!((0.9..1.1).contains(&ratio), "cell {index} chosen {count} times");
    }
}

// =============================================================================
// Suicide Deviation
// =============================================================================

#[test]
fn test_suicide_frequency_when_forced() {
    // only (1,1) is left and it completes the O middle row
    let board: Board = "XOX/O.O/XOX".parse().unwrap();
    let roles = RoleAssignment::with_human(Mark::A);
    let mut rng = GameRng::new(2024);
    let trials = 20_000;

    let relabels = (0..trials)
        .filter(|_| LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap().relabel)
        .count();

    let rate = relabels as f64 / trials as f64;
    assert!((rate - 0.90).abs() < 0.015, "suicide rate {rate}");
}

#[test]
fn test_suicide_frequency_with_controlled_draws() {
    let board: Board = "XOX/O.O/XOX".parse().unwrap();
    let roles = RoleAssignment::with_human(Mark::A);

    // tie-break draw, then threshold draw, for 100 evenly spaced thresholds
    let draws = (0..100).flat_map(|i| [0.0, i as f64 / 100.0]);
    let mut rng = ScriptedRng::new(draws);

    let relabels = (0..100)
        .filter(|_| LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap().relabel)
        .count();

    // 0.06 ..= 0.94
    assert_eq!(relabels, 89);
}

#[test]
fn test_suicide_draw_only_taken_when_forced() {
    let board: Board = "XX./O../...".parse().unwrap();
    let roles = RoleAssignment::with_human(Mark::A);
    let mut rng = ScriptedRng::new([0.5]);

    let decision = LoseSeekingOpponent.decide(&board, roles, &mut rng).unwrap();
    assert_eq!(decision.bucket, Bucket::Safe);
    assert_eq!(rng.consumed(), 1);
}
