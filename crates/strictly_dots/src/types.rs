//! Core domain types for dots and boxes.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Side taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mover {
    /// The human player (moves first).
    Player,
    /// The computer opponent.
    Computer,
}

impl Mover {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mover::Player => Mover::Computer,
            Mover::Computer => Mover::Player,
        }
    }

    /// Single-letter mark used when dumping a board.
    pub fn initial(self) -> char {
        match self {
            Mover::Player => 'P',
            Mover::Computer => 'C',
        }
    }
}

/// A grid point, 1-indexed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Vertex {
    /// Row, counted from 1 at the top.
    pub row: usize,
    /// Column, counted from 1 at the left.
    pub col: usize,
}

impl Vertex {
    /// Creates a vertex at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The vertex one column to the right.
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The vertex one row down.
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }
}

/// Orientation of an edge, relative to its origin vertex.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, EnumIter,
)]
pub enum Direction {
    /// Connects a vertex to its right-hand neighbour.
    Horizontal,
    /// Connects a vertex to the neighbour below it.
    Vertical,
}

/// An oriented edge: the origin is always the left (horizontal) or top
/// (vertical) endpoint, so every grid edge has exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Left or top endpoint.
    pub origin: Vertex,
    /// Which neighbour the edge reaches.
    pub direction: Direction,
}

impl Edge {
    /// Creates an edge from its origin and direction.
    pub const fn new(origin: Vertex, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Horizontal edge from `(row, col)` to `(row, col + 1)`.
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(Vertex::new(row, col), Direction::Horizontal)
    }

    /// Vertical edge from `(row, col)` to `(row + 1, col)`.
    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(Vertex::new(row, col), Direction::Vertical)
    }

    /// Normalizes two grid-adjacent vertices into an edge.
    ///
    /// Returns `None` unless the vertices share a row one column apart or
    /// share a column one row apart. Argument order does not matter.
    pub fn between(a: Vertex, b: Vertex) -> Option<Self> {
        if a.row == b.row && a.col.abs_diff(b.col) == 1 {
            Some(Self::new(if a.col < b.col { a } else { b }, Direction::Horizontal))
        } else if a.col == b.col && a.row.abs_diff(b.row) == 1 {
            Some(Self::new(if a.row < b.row { a } else { b }, Direction::Vertical))
        } else {
            None
        }
    }

    /// The endpoint that is not the origin.
    pub const fn far_end(&self) -> Vertex {
        match self.direction {
            Direction::Horizontal => self.origin.right(),
            Direction::Vertical => self.origin.down(),
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.origin, self.far_end())
    }
}

/// Side of a cell. Declaration order is the order the planner tests
/// for a missing edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, EnumIter,
)]
pub enum CellSide {
    /// Horizontal edge on the primary corner.
    Top,
    /// Vertical edge on the primary corner.
    Left,
    /// Horizontal edge on the vertex below the primary corner.
    Bottom,
    /// Vertical edge on the vertex right of the primary corner.
    Right,
}

/// A scoring cell, identified by its primary (top-left) corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("cell ({row}, {col})")]
pub struct Cell {
    /// Row of the primary corner.
    pub row: usize,
    /// Column of the primary corner.
    pub col: usize,
}

impl Cell {
    /// Creates the cell whose primary corner is `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The primary corner vertex.
    pub const fn corner(&self) -> Vertex {
        Vertex::new(self.row, self.col)
    }

    /// The edge bounding this cell on `side`.
    pub const fn side(&self, side: CellSide) -> Edge {
        match side {
            CellSide::Top => Edge::horizontal(self.row, self.col),
            CellSide::Left => Edge::vertical(self.row, self.col),
            CellSide::Bottom => Edge::horizontal(self.row + 1, self.col),
            CellSide::Right => Edge::vertical(self.row, self.col + 1),
        }
    }
}

/// Captured cell counts per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("player {player}, computer {computer}")]
pub struct Scores {
    /// Cells owned by the player.
    pub player: usize,
    /// Cells owned by the computer.
    pub computer: usize,
}

impl Scores {
    /// Score of one side.
    pub fn of(&self, mover: Mover) -> usize {
        match mover {
            Mover::Player => self.player,
            Mover::Computer => self.computer,
        }
    }

    /// Credits one cell to `mover`.
    pub(crate) fn increment(&mut self, mover: Mover) {
        match mover {
            Mover::Player => self.player += 1,
            Mover::Computer => self.computer += 1,
        }
    }

    /// Cells owned by either side.
    pub fn total(&self) -> usize {
        self.player + self.computer
    }
}
