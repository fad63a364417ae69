//! Human player reading vertex picks from a line-based input.

use super::Player;
use crate::session::GameEvent;
use anyhow::{Context, Result, bail};
use strictly_dots::{DotsGame, EdgeSelection, Vertex, VertexPicker};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Reads `row col` pairs, one or two per line, and pairs them into edges.
///
/// Typing `q` or closing the input leaves the game.
pub struct StdinPlayer<R> {
    name: String,
    lines: Lines<R>,
    picker: VertexPicker,
    events: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl StdinPlayer<BufReader<Stdin>> {
    /// Creates a player reading the process's standard input.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> StdinPlayer<R> {
    /// Creates a player reading from `reader`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            lines: reader.lines(),
            picker: VertexPicker::new(),
            events: None,
        }
    }

    /// Sends input feedback to an event listener.
    pub fn with_events(mut self, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }

    fn notice(&self, message: String) {
        debug!(player = %self.name, %message, "Input notice");
        if let Some(events) = &self.events {
            if events.send(GameEvent::Notice(message)).is_err() {
                debug!(player = %self.name, "Event listener gone");
            }
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line, "q" | "quit" | "exit")
}

/// Parses whitespace- or comma-separated numbers into `(row, col)` vertices.
#[instrument]
pub fn parse_vertices(line: &str) -> Result<Vec<Vertex>> {
    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .with_context(|| format!("'{}' is not a row or column number", token))
        })
        .collect::<Result<Vec<_>>>()?;

    if numbers.len() % 2 != 0 {
        bail!("Coordinates come in pairs: row col");
    }

    Ok(numbers
        .chunks_exact(2)
        .map(|pair| Vertex::new(pair[0], pair[1]))
        .collect())
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for StdinPlayer<R> {
    async fn get_move(&mut self, _game: &DotsGame) -> Result<Option<EdgeSelection>> {
        loop {
            let Some(line) = self.next_line().await? else {
                debug!(player = %self.name, "Input closed");
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }

            let vertices = match parse_vertices(&line) {
                Ok(vertices) => vertices,
                Err(e) => {
                    self.notice(e.to_string());
                    continue;
                }
            };

            for (index, &vertex) in vertices.iter().enumerate() {
                if let Some(selection) = self.picker.pick(vertex) {
                    let extra = &vertices[index + 1..];
                    if !extra.is_empty() {
                        let extra: Vec<String> = extra.iter().map(Vertex::to_string).collect();
                        self.notice(format!("Ignored extra dots: {}", extra.join(" ")));
                    }
                    return Ok(Some(selection));
                }
            }

            if let Some(first) = self.picker.pending() {
                self.notice(format!("Picked {}, now pick a neighbouring dot", first));
            }
        }
    }

    async fn rematch(&mut self) -> Result<bool> {
        self.notice("Play again? [y/N]".to_string());
        let answer = self.next_line().await?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes")))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
