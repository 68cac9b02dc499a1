//! "Perft" performance test: count the number of leaves at a given depth.
//! Also a correctness check of move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Color, Game};

/// Count leaves of the alternating-move tree `depth` plies below the start.
/// A color with no moves passes, which uses up a ply; two passes in a row end the line.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::new(), Color::Black, depth, false)
}

fn leaves_below(game: &Game, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.legal_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(game, !color, depth - 1, true);
    }

    all_moves
        .iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply_move(color, mv);
            leaves_below(&next, !color, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
#[ignore = "slow in debug builds"]
fn perft_09() {
    // First depth with positions where a color is stuck.
    assert_eq!(run_perft(9), 3005288);
}
