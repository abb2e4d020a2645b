//! Pig CLI - play a game of Pig in the terminal.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pig::console::TextConsole;
use pig::core::PigConfig;
use pig::game::Game;
use pig::players::PlayerFactory;

/// Play a game of Pig.
#[derive(Parser, Debug)]
#[command(name = "pig")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Type of player 1
    #[arg(long, default_value = "human", value_parser = ["human", "computer"])]
    player1: String,

    /// Type of player 2
    #[arg(long, default_value = "computer", value_parser = ["human", "computer"])]
    player2: String,

    /// Play a timed game
    #[arg(long)]
    timed: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> pig::Result<()> {
    let config = PigConfig::default();
    let mut factory = PlayerFactory::from_entropy(config.clone());
    info!(seed = factory.seed(), timed = args.timed, "setting up game");

    let player1 = factory.create_player("Player 1", &args.player1)?;
    let player2 = factory.create_player("Player 2", &args.player2)?;

    let mut game = if args.timed {
        Game::timed(player1, player2, config)
    } else {
        Game::new(player1, player2, config)
    };

    let mut console = TextConsole::stdio();
    game.play(&mut console)?;
    Ok(())
}
