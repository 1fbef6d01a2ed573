//! Graph ADTs and the DFS-based topological sort built on top of them.
//!
//! Four variants share one capability set ([`Graph`]):
//!
//! - [`UndirectedGraph`]: symmetric adjacency sets
//! - [`DirectedGraph`]: separate outgoing / incoming adjacency maps
//! - [`WeightedUndirectedGraph`] / [`WeightedDirectedGraph`]: the above plus a
//!   per-edge weight map that is kept in lock-step with the adjacency
//!
//! Vertices are plain `usize` ids. A vertex exists iff it has an adjacency
//! entry; an isolated vertex has an empty set, never a missing entry.

pub mod directed;
pub mod topological_sort;
pub mod undirected;
pub mod vertices;
pub mod weighted;

use crate::error::Result;
use std::collections::HashSet;

pub use directed::DirectedGraph;
pub use topological_sort::{DfsState, topological_sort, try_topological_sort};
pub use undirected::UndirectedGraph;
pub use vertices::Vertices;
pub use weighted::{WeightedDirectedGraph, WeightedUndirectedGraph};

/// Vertex identifier
pub type VertexId = usize;

/// Operations every graph variant supports.
///
/// Adding something already present and removing something absent are
/// no-ops. Only the adjacency accessors fail, and only with a NotFound error.
pub trait Graph {
    /// Add an isolated vertex. No-op if it already exists.
    fn add_vertex(&mut self, id: VertexId);

    fn has_vertex(&self, id: VertexId) -> bool;

    /// For undirected graphs the argument order does not matter.
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Remove a vertex together with every edge touching it.
    fn remove_vertex(&mut self, id: VertexId);

    fn remove_edge(&mut self, from: VertexId, to: VertexId);

    /// Outgoing neighbours (all neighbours for undirected graphs)
    fn edges(&self, id: VertexId) -> Result<&HashSet<VertexId>>;

    /// Incoming neighbours (all neighbours for undirected graphs)
    fn incoming_edges(&self, id: VertexId) -> Result<&HashSet<VertexId>>;

    /// Restartable view over all vertex ids, in hash order
    fn vertices(&self) -> Vertices<'_>;

    fn num_vertices(&self) -> usize;

    /// Number of distinct edges
    fn num_edges(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }
}

/// Graphs whose edges carry no payload
pub trait UnweightedGraph: Graph {
    /// Add an edge, creating missing endpoints. Idempotent.
    fn add_edge(&mut self, from: VertexId, to: VertexId);
}

/// Graphs with a weight stored for every edge
pub trait WeightedGraph: Graph {
    type Weight;

    /// Add an edge (creating missing endpoints) and set or overwrite its weight
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Self::Weight);

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<&Self::Weight>;

    fn edge_weight_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut Self::Weight>;
}

/// Marker for graphs where `edges` yields outgoing neighbours only.
///
/// Topological sorting is only meaningful for these.
pub trait Directed: Graph {}
