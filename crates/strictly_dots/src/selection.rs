//! Two-pick vertex selection.
//!
//! A human move is made by picking one vertex and then a second. The
//! picker holds the first pick until a different vertex arrives.

use super::Vertex;
use super::action::EdgeSelection;
use tracing::{debug, instrument};

/// Buffers vertex picks into pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexPicker {
    pending: Option<Vertex>,
}

impl VertexPicker {
    /// Creates an empty picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pick.
    ///
    /// Returns the pair once two different vertices have been picked, and
    /// empties the buffer. Picking the held vertex again is ignored.
    #[instrument(skip(self))]
    pub fn pick(&mut self, vertex: Vertex) -> Option<EdgeSelection> {
        match self.pending {
            None => {
                self.pending = Some(vertex);
                None
            }
            Some(first) if first == vertex => {
                debug!("Repeated pick ignored");
                None
            }
            Some(first) => {
                self.pending = None;
                Some(EdgeSelection::new(first, vertex))
            }
        }
    }

    /// The first pick, if one is waiting for its partner.
    pub fn pending(&self) -> Option<Vertex> {
        self.pending
    }

    /// Drops any held pick.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
