//! Tests for driving whole games through a session.

use std::time::{Duration, Instant};
use strictly_dots::{Edge, MoveError, Mover, Outcome, Scores, Tier, TierSummary};
use strictly_dots_cli::players::{RandomPlayer, StdinPlayer};
use strictly_dots_cli::{ConfigOverrides, GameConfig, GameEvent, Session, simulate};
use tokio::sync::mpsc;

fn small_config(rows: usize, cols: usize, seed: u64) -> GameConfig {
    GameConfig::new(rows, cols).with_overrides(ConfigOverrides {
        seed: Some(seed),
        computer_delay_ms: Some(0),
        ..ConfigOverrides::default()
    })
}

#[tokio::test]
async fn test_scripted_game_on_single_cell() {
    let config = small_config(2, 2, 3);
    // Garbage, a legal top edge, the same edge again, then the bottom edge
    // split over two lines.
    let input: &[u8] = b"abc\n1 1 1 2\n1 2 1 1\n2 1\n2 2\n";
    let player = StdinPlayer::new("Tester", input);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut session = Session::new(config.new_game().unwrap(), Box::new(player), Duration::ZERO)
        .with_events(tx);
    let report = session.run().await.unwrap();

    assert_eq!(report.outcome, Some(Outcome::Winner(Mover::Computer)));
    assert_eq!(report.scores, Scores { player: 0, computer: 1 });
    assert_eq!(report.moves, 4);
    assert_eq!(report.rejected, 1);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.first(), Some(&GameEvent::Started { rows: 2, cols: 2 }));
    assert!(events.contains(&GameEvent::Rejected(MoveError::EdgeAlreadyDrawn(
        Edge::horizontal(1, 1)
    ))));
    // The last cell has three sides when the computer closes it.
    let closing = GameEvent::ComputerPlanned {
        tier: Tier::CompleteNow,
        summary: TierSummary {
            complete_now: 1,
            available: 1,
            ..TierSummary::default()
        },
    };
    assert!(events.contains(&closing));
    assert_eq!(
        closing.to_string(),
        "Computer picked a complete-now edge (1 open: 1 complete-now, 0 fresh, 0 early, 0 risky)"
    );
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: Outcome::Winner(Mover::Computer),
            scores: report.scores,
        })
    );

    // Input is exhausted, so no rematch.
    assert!(!session.rematch().await.unwrap());
    session.restart();
    assert!(session.game().history().is_empty());
}

#[tokio::test]
async fn test_player_leaving_stops_session() {
    let config = small_config(3, 3, 1);
    let input: &[u8] = b"1 1 1 2\nq\n";
    let player = StdinPlayer::new("Tester", input);

    let mut session = Session::new(config.new_game().unwrap(), Box::new(player), Duration::ZERO);
    let report = session.run().await.unwrap();

    assert_eq!(report.outcome, None);
    assert!(report.moves >= 2);
    assert!(!session.game().is_game_over());
}

#[tokio::test]
async fn test_random_game_fills_board() {
    let config = small_config(5, 6, 42);
    let player = RandomPlayer::new("Random", Some(42));

    let mut session = Session::new(config.new_game().unwrap(), Box::new(player), Duration::ZERO);
    let report = session.run().await.unwrap();

    let board = session.game().board();
    assert_eq!(report.scores.total(), board.cell_count());
    assert_eq!(report.moves, board.total_edge_count());
    assert_eq!(report.rejected, 0);
    assert_eq!(report.outcome, Some(Outcome::from_scores(report.scores)));
}

#[tokio::test]
async fn test_computer_pauses_before_moving() {
    let config = small_config(2, 2, 0);
    let player = RandomPlayer::new("Random", Some(0));
    let delay = Duration::from_millis(5);

    let mut session = Session::new(config.new_game().unwrap(), Box::new(player), delay);
    let started = Instant::now();
    session.run().await.unwrap();

    // A single cell always takes two computer moves.
    assert!(started.elapsed() >= delay * 2);
}

#[tokio::test]
async fn test_simulation_is_reproducible() {
    let config = small_config(4, 4, 9);
    let first = simulate(&config, 12).await.unwrap();
    let second = simulate(&config, 12).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.games, 12);
    assert_eq!(first.player_wins + first.computer_wins + first.draws, 12);
}
