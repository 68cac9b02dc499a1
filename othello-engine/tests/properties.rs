use othello_engine::{BoardSnapshot, Cell, Color, Direction, Game, GameError, Location, NUM_SPACES};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn registered() -> Game {
    let mut game = Game::new();
    game.register_player(Color::Black, "Black").unwrap();
    game.register_player(Color::White, "White").unwrap();
    game
}

/// The pieces a move at `pos` must flip, computed by walking the board before the move.
fn expected_flips(before: &BoardSnapshot, color: Color, pos: Location) -> BTreeSet<Location> {
    let mut flips = BTreeSet::new();
    for direction in Direction::ALL.iter().copied() {
        let mut run = Vec::new();
        let mut cursor = pos.step(direction);
        while let Some(loc) = cursor {
            if before[loc] != Cell::Occupied(!color) {
                break;
            }
            run.push(loc);
            cursor = loc.step(direction);
        }
        if let Some(end) = cursor {
            if before[end] == Cell::Occupied(color) {
                flips.extend(run);
            }
        }
    }
    flips
}

/// Grid, index and counters all agree.
fn assert_consistent(game: &Game) {
    let snapshot = game.board_snapshot();
    let mut total = snapshot.count_empty();

    for color in Color::ALL.iter().copied() {
        let indexed: BTreeSet<Location> = game.pieces(color).collect();
        let on_board: BTreeSet<Location> = Location::all()
            .filter(|&loc| snapshot[loc] == Cell::Occupied(color))
            .collect();
        assert_eq!(indexed, on_board);
        assert_eq!(indexed.len(), game.player(color).pieces() as usize);
        assert!(indexed.iter().all(|&loc| !snapshot[loc].is_empty()));
        total += indexed.len();
    }

    assert_eq!(total, NUM_SPACES);
}

proptest! {
    /// Random playouts: every accepted move flips exactly the sandwiched runs, every
    /// rejected move changes nothing, and the game ends exactly when both colors are stuck.
    #[test]
    fn random_playout(choices in prop::collection::vec(any::<usize>(), 0..70), probes in prop::collection::vec(0usize..64, 70)) {
        let mut game = registered();
        let mut color = Color::Black;

        for (step, choice) in choices.into_iter().enumerate() {
            let black_moves = game.legal_moves(Color::Black);
            let white_moves = game.legal_moves(Color::White);
            prop_assert_eq!(
                game.is_game_over(),
                black_moves.is_empty() && white_moves.is_empty()
            );
            if game.is_game_over() {
                break;
            }

            let moves = if color == Color::Black { black_moves } else { white_moves };
            if moves.is_empty() {
                color = !color;
                continue;
            }

            // Probe a square that is not a legal move: it must be rejected untouched.
            let probe = Location::from_index(probes[step % probes.len()]).unwrap();
            if !moves.contains(probe) {
                let before = game.clone();
                let rejected = matches!(
                    game.submit_move(color, probe),
                    Err(GameError::IllegalMove { .. })
                );
                prop_assert!(rejected);
                prop_assert_eq!(&game, &before);
            }

            let mv = moves.iter().nth(choice % moves.len()).unwrap();
            let before = game.board_snapshot();
            let (black, white) = game.scores();

            let report = game.submit_move(color, mv).unwrap();
            let flipped: BTreeSet<Location> = report.flipped.iter().copied().collect();

            prop_assert_eq!(flipped.len(), report.flipped.len());
            prop_assert!(!flipped.is_empty());
            prop_assert_eq!(&flipped, &expected_flips(&before, color, mv));
            prop_assert_eq!(report.board, game.board_snapshot());
            prop_assert_eq!(report.outcome.is_some(), game.is_game_over());

            let gained = 1 + flipped.len() as u8;
            let lost = flipped.len() as u8;
            let expected = match color {
                Color::Black => (black + gained, white - lost),
                Color::White => (black - lost, white + gained),
            };
            prop_assert_eq!(game.scores(), expected);

            assert_consistent(&game);
            color = !color;
        }
    }

    /// Squares that are already occupied are never legal.
    #[test]
    fn occupied_squares_are_illegal(choices in prop::collection::vec(any::<usize>(), 0..30)) {
        let mut game = registered();
        let mut color = Color::Black;

        for choice in choices {
            let moves = game.legal_moves(color);
            if moves.is_empty() {
                break;
            }
            let mv = moves.iter().nth(choice % moves.len()).unwrap();
            game.submit_move(color, mv).unwrap();
            color = !color;
        }

        let snapshot = game.board_snapshot();
        for loc in Location::all().filter(|&loc| !snapshot[loc].is_empty()) {
            prop_assert!(!game.legal_moves(Color::Black).contains(loc));
            prop_assert!(!game.legal_moves(Color::White).contains(loc));
        }
    }
}
