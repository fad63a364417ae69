//! Vertex grid with edge flags and cell ownership.
//!
//! Each vertex stores only the edges that leave it to the right and
//! downward, so every grid edge lives on exactly one vertex. A cell is owned
//! through its primary (top-left) corner.

use super::action::MoveError;
use super::{Cell, CellSide, Direction, Edge, Mover, Vertex};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Per-vertex flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct VertexState {
    /// Edge to the vertex on the right.
    right: bool,
    /// Edge to the vertex below.
    down: bool,
    /// Owner of the cell this vertex is the primary corner of.
    owner: Option<Mover>,
}

/// The four edge flags of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellEdges {
    /// Top side drawn.
    pub top: bool,
    /// Left side drawn.
    pub left: bool,
    /// Bottom side drawn.
    pub bottom: bool,
    /// Right side drawn.
    pub right: bool,
}

impl CellEdges {
    /// Whether `side` is drawn.
    pub fn get(&self, side: CellSide) -> bool {
        match side {
            CellSide::Top => self.top,
            CellSide::Left => self.left,
            CellSide::Bottom => self.bottom,
            CellSide::Right => self.right,
        }
    }

    /// Number of drawn sides (0-4).
    pub fn drawn_count(&self) -> usize {
        CellSide::iter().filter(|side| self.get(*side)).count()
    }

    /// All four sides drawn.
    pub fn is_complete(&self) -> bool {
        self.drawn_count() == 4
    }

    /// First undrawn side in top, left, bottom, right order.
    pub fn first_missing(&self) -> Option<CellSide> {
        CellSide::iter().find(|side| !self.get(*side))
    }
}

/// An R x C grid of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major vertex state.
    vertices: Vec<VertexState>,
}

impl Board {
    /// Creates an empty board of `rows` x `cols` vertices.
    ///
    /// Fails with [`MoveError::InvalidDimensions`] when either side is below
    /// two, or when the vertex or edge count does not fit in memory.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, MoveError> {
        let invalid = MoveError::InvalidDimensions { rows, cols };
        if rows < 2 || cols < 2 {
            return Err(invalid);
        }

        // Edge count 2RC - R - C is the largest figure derived from the size.
        let vertex_count = rows.checked_mul(cols).ok_or(invalid.clone())?;
        vertex_count.checked_mul(2).ok_or(invalid.clone())?;

        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(vertex_count)
            .map_err(|_| invalid)?;
        vertices.resize(vertex_count, VertexState::default());

        debug!(cells = (rows - 1) * (cols - 1), "Board created");
        Ok(Self {
            rows,
            cols,
            vertices,
        })
    }

    /// Removes every edge and owner, keeping the dimensions.
    pub(crate) fn clear(&mut self) {
        self.vertices.fill(VertexState::default());
    }

    /// Number of vertex rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of vertex columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `(R - 1) * (C - 1)`.
    pub fn cell_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    /// Number of edges the grid can hold.
    pub fn total_edge_count(&self) -> usize {
        self.rows * (self.cols - 1) + self.cols * (self.rows - 1)
    }

    /// Whether `vertex` lies on the grid.
    pub fn contains(&self, vertex: Vertex) -> bool {
        (1..=self.rows).contains(&vertex.row) && (1..=self.cols).contains(&vertex.col)
    }

    /// Whether `edge` has both endpoints on the grid.
    pub fn fits(&self, edge: Edge) -> bool {
        self.contains(edge.origin) && self.contains(edge.far_end())
    }

    /// Whether `cell` is a real cell, i.e. its primary corner is not on the
    /// last row or column.
    pub fn is_primary(&self, cell: Cell) -> bool {
        (1..self.rows).contains(&cell.row) && (1..self.cols).contains(&cell.col)
    }

    fn index(&self, vertex: Vertex) -> Option<usize> {
        self.contains(vertex)
            .then(|| (vertex.row - 1) * self.cols + (vertex.col - 1))
    }

    fn state(&self, vertex: Vertex) -> Option<&VertexState> {
        self.index(vertex).map(|idx| &self.vertices[idx])
    }

    /// Whether `edge` is drawn. Edges off the grid are never drawn.
    pub fn edge_drawn(&self, edge: Edge) -> bool {
        if !self.fits(edge) {
            return false;
        }
        self.state(edge.origin).is_some_and(|state| match edge.direction {
            Direction::Horizontal => state.right,
            Direction::Vertical => state.down,
        })
    }

    /// Sets the flag for `edge` on its origin vertex.
    ///
    /// Redrawing a drawn edge is a no-op here; rejecting it is the
    /// validator's job.
    #[instrument(skip(self), fields(edge = %edge))]
    pub fn draw_edge(&mut self, edge: Edge) -> Result<(), MoveError> {
        if !self.fits(edge) {
            return Err(MoveError::EdgeOutOfRange(edge));
        }
        let idx = self.index(edge.origin).ok_or(MoveError::EdgeOutOfRange(edge))?;
        let state = &mut self.vertices[idx];
        match edge.direction {
            Direction::Horizontal => state.right = true,
            Direction::Vertical => state.down = true,
        }
        debug!("Edge drawn");
        Ok(())
    }

    /// Normalizes two endpoints and draws the edge between them.
    #[instrument(skip(self))]
    pub fn draw_between(&mut self, a: Vertex, b: Vertex) -> Result<Edge, MoveError> {
        let edge = Edge::between(a, b).ok_or(MoveError::NotAdjacent(a, b))?;
        self.draw_edge(edge)?;
        Ok(edge)
    }

    /// The four edge flags of `cell`.
    pub fn cell_edges(&self, cell: Cell) -> Result<CellEdges, MoveError> {
        if !self.is_primary(cell) {
            return Err(MoveError::CellOutOfRange(cell));
        }
        Ok(CellEdges {
            top: self.edge_drawn(cell.side(CellSide::Top)),
            left: self.edge_drawn(cell.side(CellSide::Left)),
            bottom: self.edge_drawn(cell.side(CellSide::Bottom)),
            right: self.edge_drawn(cell.side(CellSide::Right)),
        })
    }

    /// Owner of `cell`, if captured.
    pub fn cell_owner(&self, cell: Cell) -> Option<Mover> {
        if !self.is_primary(cell) {
            return None;
        }
        self.state(cell.corner()).and_then(|state| state.owner)
    }

    /// Awards `cell` to `mover`.
    #[instrument(skip(self), fields(cell = %cell, mover = %mover))]
    pub fn set_cell_owner(&mut self, cell: Cell, mover: Mover) -> Result<(), MoveError> {
        if !self.is_primary(cell) {
            return Err(MoveError::CellOutOfRange(cell));
        }
        let idx = self
            .index(cell.corner())
            .ok_or(MoveError::CellOutOfRange(cell))?;
        let state = &mut self.vertices[idx];
        if state.owner.is_some() {
            return Err(MoveError::CellAlreadyOwned(cell));
        }
        state.owner = Some(mover);
        debug!("Cell owner set");
        Ok(())
    }

    /// Owner flag stored on any vertex, including boundary vertices.
    pub(crate) fn owner_at(&self, vertex: Vertex) -> Option<Mover> {
        self.state(vertex).and_then(|state| state.owner)
    }

    /// All vertices, row-major.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.cols).map(move |col| Vertex::new(row, col)))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..self.rows).flat_map(move |row| (1..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Every edge the grid can hold, row-major, horizontal before vertical.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |vertex| {
            Direction::iter()
                .map(move |direction| Edge::new(vertex, direction))
                .filter(move |edge| self.fits(*edge))
        })
    }

    /// Edges not yet drawn.
    pub fn undrawn_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges().filter(move |edge| !self.edge_drawn(*edge))
    }

    /// Number of drawn edges.
    pub fn drawn_edge_count(&self) -> usize {
        self.edges().filter(|edge| self.edge_drawn(*edge)).count()
    }

    /// Number of owned cells.
    pub fn owned_count(&self) -> usize {
        self.cells().filter(|cell| self.cell_owner(*cell).is_some()).count()
    }

    /// Number of cells owned by `mover`.
    pub fn owned_by(&self, mover: Mover) -> usize {
        self.cells()
            .filter(|cell| self.cell_owner(*cell) == Some(mover))
            .count()
    }

    /// Writes an owner flag with no checks, for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn force_owner(&mut self, vertex: Vertex, mover: Mover) {
        if let Some(idx) = self.index(vertex) {
            self.vertices[idx].owner = Some(mover);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 4).unwrap();
        assert_eq!(board.cell_count(), 6);
        assert_eq!(board.total_edge_count(), 17);
        assert_eq!(board.edges().count(), 17);
        assert_eq!(board.drawn_edge_count(), 0);
        assert_eq!(board.owned_count(), 0);
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert_eq!(
            Board::new(1, 5),
            Err(MoveError::InvalidDimensions { rows: 1, cols: 5 })
        );
        assert!(Board::new(4, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(MoveError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(Board::new(1 << 40, 1 << 40).is_err());
        assert!(Board::new(usize::MAX / 2, usize::MAX / 2).is_err());
        // Fits the count but not the address space.
        assert!(Board::new(1 << 31, 1 << 31).is_err());
    }

    #[test]
    fn test_draw_stores_on_primary_endpoint() {
        let mut board = Board::new(3, 3).unwrap();
        let edge = board
            .draw_between(Vertex::new(2, 3), Vertex::new(2, 2))
            .unwrap();
        assert_eq!(edge, Edge::horizontal(2, 2));
        assert!(board.edge_drawn(Edge::horizontal(2, 2)));
        assert!(!board.edge_drawn(Edge::horizontal(2, 1)));

        let edge = board
            .draw_between(Vertex::new(3, 1), Vertex::new(2, 1))
            .unwrap();
        assert_eq!(edge, Edge::vertical(2, 1));
    }

    #[test]
    fn test_boundary_vertices_can_hold_edges() {
        let mut board = Board::new(3, 3).unwrap();
        // Last row horizontal, last column vertical.
        assert!(board.draw_edge(Edge::horizontal(3, 1)).is_ok());
        assert!(board.draw_edge(Edge::vertical(1, 3)).is_ok());
    }

    #[test]
    fn test_edge_out_of_range() {
        let mut board = Board::new(3, 3).unwrap();
        assert_eq!(
            board.draw_edge(Edge::horizontal(1, 3)),
            Err(MoveError::EdgeOutOfRange(Edge::horizontal(1, 3)))
        );
        assert_eq!(
            board.draw_edge(Edge::vertical(3, 2)),
            Err(MoveError::EdgeOutOfRange(Edge::vertical(3, 2)))
        );
        assert!(board.draw_edge(Edge::vertical(0, 1)).is_err());
    }

    #[test]
    fn test_cell_edges() {
        let mut board = Board::new(3, 3).unwrap();
        let cell = Cell::new(1, 2);
        board.draw_edge(Edge::horizontal(2, 2)).unwrap();
        board.draw_edge(Edge::vertical(1, 3)).unwrap();

        let edges = board.cell_edges(cell).unwrap();
        assert!(!edges.top && !edges.left && edges.bottom && edges.right);
        assert_eq!(edges.drawn_count(), 2);
        assert_eq!(edges.first_missing(), Some(CellSide::Top));
        assert!(board.cell_edges(Cell::new(3, 1)).is_err());
    }

    #[test]
    fn test_set_cell_owner_twice() {
        let mut board = Board::new(2, 2).unwrap();
        let cell = Cell::new(1, 1);
        board.set_cell_owner(cell, Mover::Player).unwrap();
        assert_eq!(board.cell_owner(cell), Some(Mover::Player));
        assert_eq!(
            board.set_cell_owner(cell, Mover::Computer),
            Err(MoveError::CellAlreadyOwned(cell))
        );
        assert_eq!(board.cell_owner(cell), Some(Mover::Player));
    }

    #[test]
    fn test_boundary_vertex_is_not_a_cell() {
        let mut board = Board::new(2, 3).unwrap();
        assert_eq!(
            board.set_cell_owner(Cell::new(2, 1), Mover::Player),
            Err(MoveError::CellOutOfRange(Cell::new(2, 1)))
        );
        assert_eq!(
            board.set_cell_owner(Cell::new(1, 3), Mover::Player),
            Err(MoveError::CellOutOfRange(Cell::new(1, 3)))
        );
        assert_eq!(board.cells().count(), 2);
    }
}
