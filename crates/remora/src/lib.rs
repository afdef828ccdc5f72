//! Directed weighted graph store with line-oriented text persistence.
//!
//! Design goals:
//! - insertion-ordered vertex and edge storage, so saved files are stable
//! - validate-before-mutate operations that never leave the graph inconsistent
//! - two save layouts selected by mutation history (see [`codec`])

pub mod codec;
pub mod error;
pub mod graph;
pub mod settings;

pub use error::{Error, Result};
pub use graph::{Cost, EdgeKey, Graph, GraphError, Snapshot, VertexId};
pub use settings::Settings;

#[cfg(test)]
mod tests;
