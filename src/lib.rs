//! # graphsort
//!
//! Undirected, directed and weighted graph ADTs, a DFS-based topological
//! sort with cycle detection, and a JSON method handler that exposes the
//! sort over a CLI and an MCP server.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod mcp;
pub mod methods;
pub mod models;

pub use error::{GraphError, Result};
pub use graph::{
    DirectedGraph, Graph, UndirectedGraph, UnweightedGraph, VertexId, WeightedDirectedGraph,
    WeightedGraph, WeightedUndirectedGraph, topological_sort, try_topological_sort,
};
pub use models::*;
