use anyhow::Result;
use clap::Parser;
use othello_cli::play;
use othello_engine::{Color, Game};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play a game of Othello in the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the black player (moves first)
    #[arg(long, default_value = "Black")]
    black: String,

    /// Name of the white player
    #[arg(long, default_value = "White")]
    white: String,

    /// Log filter, e.g. "debug" or "othello_engine=debug"
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level)?)
        .with_writer(io::stderr)
        .init();

    let mut game = Game::new();
    game.register_player(Color::Black, args.black)?;
    game.register_player(Color::White, args.white)?;
    info!("starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut game, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
