//! Internal storage entries for [`Graph`](super::Graph).

use super::VertexId;

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct VertexEntry {
    pub(in crate::graph) inbound: Vec<VertexId>,
    pub(in crate::graph) outbound: Vec<VertexId>,
}
