//! Strictly Dots - play dots and boxes against the computer.

use anyhow::Result;
use clap::Parser;
use strictly_dots_cli::cli::{Cli, Command, GameArgs};
use strictly_dots_cli::players::StdinPlayer;
use strictly_dots_cli::{GameEvent, Session, simulate};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Simulate { game, games } => run_simulate(game, games).await,
    }
}

/// Play against the computer at the terminal
async fn run_play(args: GameArgs) -> Result<()> {
    let config = args.resolve()?;
    info!(?config, "Starting play");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}", event);
        }
    });

    let player = StdinPlayer::stdin("You").with_events(event_tx.clone());
    let mut session = Session::new(config.new_game()?, Box::new(player), config.computer_delay())
        .with_events(event_tx);

    loop {
        let report = session.run().await?;
        if report.outcome.is_none() || !session.rematch().await? {
            break;
        }
        session.restart();
    }

    // Dropping the session closes the channel and lets the printer finish
    drop(session);
    printer.await?;
    Ok(())
}

/// Run a batch of random-player games and print the tally
async fn run_simulate(args: GameArgs, games: usize) -> Result<()> {
    let config = args.resolve()?;
    let tally = simulate(&config, games).await?;
    println!("{}", tally);
    Ok(())
}
