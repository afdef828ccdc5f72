//! Directed weighted graph store.
//!
//! Vertices are bare integers; edges are ordered `(from, to)` pairs carrying
//! an integer cost, at most one edge per pair. Both the vertex map and the
//! cost map iterate in insertion order, which is what keeps saved files
//! stable across load/save cycles.

mod edge_key;
mod entries;
mod random;
mod snapshot;

pub use edge_key::EdgeKey;
pub use snapshot::Snapshot;

use entries::VertexEntry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Vertex identifier. Unique within a graph; carries no payload.
pub type VertexId = i64;

/// Edge weight. May be negative.
pub type Cost = i64;

/// Structural precondition violation: the vertex or edge an operation was
/// asked to touch is not in the graph. Always recoverable; a failed operation
/// leaves the graph exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    VertexNotFound(VertexId),

    #[error("edge ({from}, {to}) is not in the graph")]
    EdgeNotFound { from: VertexId, to: VertexId },
}

/// Directed weighted graph.
///
/// The dirty flag records whether the structure still matches the canonical
/// header file layout it was last loaded in; [`crate::codec`] reads it to
/// pick the save layout. Every mutation that changes state sets it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: FxIndexMap<VertexId, VertexEntry>,
    costs: FxIndexMap<EdgeKey, Cost>,
    dirty: bool,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(&v)
    }

    fn require_vertex(&self, v: VertexId) -> Result<&VertexEntry, GraphError> {
        self.vertices.get(&v).ok_or(GraphError::VertexNotFound(v))
    }

    /// Adds `v` to the graph. A vertex that already exists is left untouched.
    pub fn add_vertex(&mut self, v: VertexId) {
        if self.ensure_vertex(v) {
            self.dirty = true;
        }
    }

    /// Inserts `v` without touching the dirty flag. Returns whether it was new.
    pub(crate) fn ensure_vertex(&mut self, v: VertexId) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, VertexEntry::default());
        true
    }

    /// Connects `from -> to`. Both endpoints must already be vertices; if the
    /// edge already exists only its cost is overwritten.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<(), GraphError> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        self.upsert_edge(from, to, cost);
        self.dirty = true;
        Ok(())
    }

    /// Edge upsert with implicit endpoint creation, used by the codec and the
    /// random generator. Does not touch the dirty flag.
    pub(crate) fn upsert_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) {
        let key = EdgeKey::new(from, to);
        if let Some(slot) = self.costs.get_mut(&key) {
            *slot = cost;
            return;
        }

        self.ensure_vertex(from);
        self.ensure_vertex(to);
        if let Some(entry) = self.vertices.get_mut(&to) {
            entry.inbound.push(from);
        }
        if let Some(entry) = self.vertices.get_mut(&from) {
            entry.outbound.push(to);
        }
        self.costs.insert(key, cost);
    }

    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        if self.costs.shift_remove(&EdgeKey::new(from, to)).is_none() {
            return Err(GraphError::EdgeNotFound { from, to });
        }
        if let Some(entry) = self.vertices.get_mut(&to) {
            remove_first(&mut entry.inbound, from);
        }
        if let Some(entry) = self.vertices.get_mut(&from) {
            remove_first(&mut entry.outbound, to);
        }
        self.dirty = true;
        Ok(())
    }

    /// Removes `v` together with every edge it is an endpoint of.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<(), GraphError> {
        let entry = self
            .vertices
            .shift_remove(&v)
            .ok_or(GraphError::VertexNotFound(v))?;

        for &to in &entry.outbound {
            self.costs.shift_remove(&EdgeKey::new(v, to));
            if let Some(other) = self.vertices.get_mut(&to) {
                remove_first(&mut other.inbound, v);
            }
        }
        for &from in &entry.inbound {
            self.costs.shift_remove(&EdgeKey::new(from, v));
            if let Some(other) = self.vertices.get_mut(&from) {
                remove_first(&mut other.outbound, v);
            }
        }

        self.dirty = true;
        Ok(())
    }

    /// Whether the edge `from -> to` exists. Unlike [`Graph::cost`], this
    /// requires both endpoints to be vertices.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool, GraphError> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        Ok(self.costs.contains_key(&EdgeKey::new(from, to)))
    }

    pub fn cost(&self, from: VertexId, to: VertexId) -> Result<Cost, GraphError> {
        self.costs
            .get(&EdgeKey::new(from, to))
            .copied()
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    pub fn set_cost(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<(), GraphError> {
        let slot = self
            .costs
            .get_mut(&EdgeKey::new(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })?;
        *slot = cost;
        self.dirty = true;
        Ok(())
    }

    /// `(in_degree, out_degree)` of `v`.
    pub fn degree(&self, v: VertexId) -> Result<(usize, usize), GraphError> {
        let entry = self.require_vertex(v)?;
        Ok((entry.inbound.len(), entry.outbound.len()))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    pub fn vertices(&self) -> Snapshot<VertexId> {
        Snapshot::new(self.vertices.keys().copied().collect())
    }

    pub fn successors(&self, v: VertexId) -> Result<Snapshot<VertexId>, GraphError> {
        let entry = self.require_vertex(v)?;
        Ok(Snapshot::new(entry.outbound.clone()))
    }

    pub fn predecessors(&self, v: VertexId) -> Result<Snapshot<VertexId>, GraphError> {
        let entry = self.require_vertex(v)?;
        Ok(Snapshot::new(entry.inbound.clone()))
    }

    /// Edges with their costs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, Cost)> + '_ {
        self.costs.iter().map(|(&key, &cost)| (key, cost))
    }

    /// Vertices with no inbound and no outbound edges, in insertion order.
    pub fn isolated_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .filter(|(_, entry)| entry.inbound.is_empty() && entry.outbound.is_empty())
            .map(|(&v, _)| v)
            .collect()
    }

    /// Whether the structure diverged from the canonical header layout it was
    /// last loaded in.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}

/// Removes the first occurrence of `value`, keeping the order of the rest.
fn remove_first(list: &mut Vec<VertexId>, value: VertexId) {
    if let Some(pos) = list.iter().position(|&x| x == value) {
        list.remove(pos);
    }
}
