use anyhow::Result;
use othello_engine::{Color, Game, GameError, Location, Outcome};
use std::io::{BufRead, Write};
use tracing::debug;

/// Play an interactive Othello game, reading moves from `input` and writing to `output`.
///
/// Returns the outcome, or None if the input ran out or a player typed "quit".
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> Result<Option<Outcome>> {
    let mut lines = input.lines();
    let mut color = Color::default();

    loop {
        if game.is_game_over() {
            writeln!(output, "\n{}\n\n{}", game, game.summary())?;
            return Ok(Some(game.winner()));
        }

        let moves = game.legal_moves(color);
        if moves.is_empty() {
            writeln!(output, "{} has no legal moves and passes.", color)?;
            color = !color;
            continue;
        }

        writeln!(output, "\n{}\n", game)?;
        let name = game.player(color).name().unwrap_or_default().to_string();
        write!(output, "{} ({}) to move: ", color, name)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        let location: Location = match line.parse() {
            Ok(location) => location,
            Err(_) => {
                writeln!(output, "Cannot parse move {:?}. Use a square like \"E3\".", line)?;
                continue;
            }
        };

        match game.submit_move(color, location) {
            Ok(report) => {
                debug!(flipped = report.flipped.len(), "move accepted");
                if let Some(outcome) = report.outcome {
                    writeln!(output, "\n{}\n\n{}", game, game.summary())?;
                    return Ok(Some(outcome));
                }
                color = !color;
            }
            Err(GameError::IllegalMove { legal, .. }) => {
                writeln!(output, "Invalid move. Here are the valid moves: {}", legal)?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn registered() -> Game {
        let mut game = Game::new();
        game.register_player(Color::Black, "Ada").unwrap();
        game.register_player(Color::White, "Grace").unwrap();
        game
    }

    fn run(game: &mut Game, script: &str) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let outcome = play(game, Cursor::new(script.to_string()), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn quit_leaves_game_running() {
        let mut game = registered();
        let (outcome, output) = run(&mut game, "E3\nquit\n");

        assert_eq!(outcome, None);
        assert_eq!(game.scores(), (4, 1));
        assert!(output.contains("Black (Ada) to move: "));
        assert!(output.contains("White (Grace) to move: "));
    }

    #[test]
    fn bad_input_is_retried() {
        let mut game = registered();
        let (outcome, output) = run(&mut game, "Z9\nA1\n");

        assert_eq!(outcome, None);
        assert!(output.contains("Cannot parse move \"Z9\""));
        assert!(output.contains("Invalid move. Here are the valid moves: [E3, F4, C5, D6]"));
        assert_eq!(game.scores(), (2, 2));
    }

    #[test]
    fn stuck_color_passes() {
        // Leaves Black with no legal move while White still has four.
        let mut game = registered();
        for &(color, square) in &[
            (Color::White, "D3"),
            (Color::Black, "C5"),
            (Color::Black, "D2"),
            (Color::White, "C2"),
            (Color::Black, "B2"),
            (Color::Black, "F3"),
        ] {
            game.submit_move(color, square.parse().unwrap()).unwrap();
        }
        let (outcome, output) = run(&mut game, "F5
quit
");

        assert_eq!(outcome, None);
        assert_eq!(game.scores(), (8, 3));

        let pass = output.find("Black has no legal moves and passes.").unwrap();
        let white_turn = output.find("White (Grace) to move: ").unwrap();
        let black_turn = output.find("Black (Ada) to move: ").unwrap();
        assert!(pass < white_turn && white_turn < black_turn);
    }

    #[test]
    fn finished_game_is_announced() {
        // After E3, Black's C5 takes the last white piece.
        let mut game = registered();
        game.submit_move(Color::Black, "E3".parse().unwrap()).unwrap();
        let (outcome, output) = run(&mut game, "C5\n");

        assert_eq!(outcome, Some(Outcome::Winner(Color::Black)));
        assert!(output.contains("Game is ended white piece: 0 black piece: 6\nWinner is black player: Ada"));
        assert!(game.is_game_over());
    }

    #[test]
    fn finished_game_returns_immediately() {
        let mut game = registered();
        game.submit_move(Color::Black, "E3".parse().unwrap()).unwrap();
        game.submit_move(Color::Black, "C5".parse().unwrap()).unwrap();
        let (outcome, output) = run(&mut game, "A1\n");

        assert_eq!(outcome, Some(Outcome::Winner(Color::Black)));
        assert!(!output.contains("to move"));
    }
}
