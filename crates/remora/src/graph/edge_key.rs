//! Edge key type.
//!
//! Edges are ordered `(from, to)` pairs and the graph is not a multigraph,
//! so the pair is the whole identity.

use super::VertexId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: VertexId,
    pub to: VertexId,
}

impl EdgeKey {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}
