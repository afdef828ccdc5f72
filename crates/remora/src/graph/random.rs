//! Random graph population.

use rand::Rng;
use tracing::debug;

use super::{EdgeKey, Graph, VertexId};

impl Graph {
    /// Replaces the graph with a random one: vertices `0..vertex_count`, then
    /// `edge_count` distinct ordered edges sampled uniformly (self-loops
    /// allowed) with costs uniform in `[-5, 255]`. Leaves the graph clean.
    ///
    /// Collisions are retried without bound, so `edge_count` must not exceed
    /// `vertex_count * vertex_count` or this never terminates; asking for
    /// edges on an empty vertex range panics.
    pub fn create_random(&mut self, vertex_count: usize, edge_count: usize) {
        self.create_random_with(&mut rand::thread_rng(), vertex_count, edge_count);
    }

    pub fn create_random_with<R: Rng>(
        &mut self,
        rng: &mut R,
        vertex_count: usize,
        edge_count: usize,
    ) {
        *self = Graph::new();
        for v in 0..vertex_count {
            self.ensure_vertex(v as VertexId);
        }

        let mut inserted = 0;
        while inserted < edge_count {
            let from = rng.gen_range(0..vertex_count) as VertexId;
            let to = rng.gen_range(0..vertex_count) as VertexId;
            if self.costs.contains_key(&EdgeKey::new(from, to)) {
                continue;
            }
            self.upsert_edge(from, to, rng.gen_range(-5..=255));
            inserted += 1;
        }

        debug!(vertex_count, edge_count, "generated random graph");
    }
}
