//! Weighted graph variants.
//!
//! Both wrap their unweighted counterpart for adjacency and keep a separate
//! weight map. A weight entry exists iff the edge exists: every removal path
//! erases the weights of the edges it deletes before touching adjacency.

use super::{
    Directed, DirectedGraph, Graph, UndirectedGraph, UnweightedGraph, VertexId, Vertices,
    WeightedGraph,
};
use crate::error::{GraphError, Result};
use std::collections::{HashMap, HashSet};

/// Undirected graph with a weight per edge.
///
/// Weight keys are canonicalized (smaller id first), so `(a, b)` and
/// `(b, a)` address the same stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedUndirectedGraph<W> {
    graph: UndirectedGraph,
    weights: HashMap<(VertexId, VertexId), W>,
}

impl<W> WeightedUndirectedGraph<W> {
    pub fn new() -> Self {
        Self {
            graph: UndirectedGraph::new(),
            weights: HashMap::new(),
        }
    }

    fn edge_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if a < b { (a, b) } else { (b, a) }
    }

    /// Unweighted view of the adjacency structure
    pub fn as_unweighted(&self) -> &UndirectedGraph {
        &self.graph
    }
}

impl<W> Default for WeightedUndirectedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph for WeightedUndirectedGraph<W> {
    fn add_vertex(&mut self, id: VertexId) {
        self.graph.add_vertex(id);
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.graph.has_vertex(id)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.graph.has_edge(from, to)
    }

    fn remove_vertex(&mut self, id: VertexId) {
        if let Ok(neighbours) = self.graph.edges(id) {
            for &neighbour in neighbours {
                self.weights.remove(&Self::edge_key(id, neighbour));
            }
        }
        self.graph.remove_vertex(id);
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        self.weights.remove(&Self::edge_key(from, to));
        self.graph.remove_edge(from, to);
    }

    fn edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.graph.edges(id)
    }

    fn incoming_edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.graph.incoming_edges(id)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.graph.vertices()
    }

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }
}

impl<W> WeightedGraph for WeightedUndirectedGraph<W> {
    type Weight = W;

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        self.graph.add_edge(from, to);
        self.weights.insert(Self::edge_key(from, to), weight);
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<&W> {
        self.weights
            .get(&Self::edge_key(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    fn edge_weight_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut W> {
        self.weights
            .get_mut(&Self::edge_key(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })
    }
}

impl<W> Extend<(VertexId, VertexId, W)> for WeightedUndirectedGraph<W> {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<W> FromIterator<(VertexId, VertexId, W)> for WeightedUndirectedGraph<W> {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

/// Directed graph with a weight per edge, keyed by the exact ordered pair
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedDirectedGraph<W> {
    graph: DirectedGraph,
    weights: HashMap<(VertexId, VertexId), W>,
}

impl<W> WeightedDirectedGraph<W> {
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            weights: HashMap::new(),
        }
    }

    pub fn as_unweighted(&self) -> &DirectedGraph {
        &self.graph
    }
}

impl<W> Default for WeightedDirectedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph for WeightedDirectedGraph<W> {
    fn add_vertex(&mut self, id: VertexId) {
        self.graph.add_vertex(id);
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.graph.has_vertex(id)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.graph.has_edge(from, to)
    }

    fn remove_vertex(&mut self, id: VertexId) {
        if let Ok(targets) = self.graph.edges(id) {
            for &target in targets {
                self.weights.remove(&(id, target));
            }
        }
        if let Ok(sources) = self.graph.incoming_edges(id) {
            for &source in sources {
                self.weights.remove(&(source, id));
            }
        }
        self.graph.remove_vertex(id);
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        self.weights.remove(&(from, to));
        self.graph.remove_edge(from, to);
    }

    fn edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.graph.edges(id)
    }

    fn incoming_edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.graph.incoming_edges(id)
    }

    fn vertices(&self) -> Vertices<'_> {
        self.graph.vertices()
    }

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }
}

impl<W> WeightedGraph for WeightedDirectedGraph<W> {
    type Weight = W;

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        self.graph.add_edge(from, to);
        self.weights.insert((from, to), weight);
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Result<&W> {
        self.weights
            .get(&(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    fn edge_weight_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut W> {
        self.weights
            .get_mut(&(from, to))
            .ok_or(GraphError::EdgeNotFound { from, to })
    }
}

impl<W> Directed for WeightedDirectedGraph<W> {}

impl<W> Extend<(VertexId, VertexId, W)> for WeightedDirectedGraph<W> {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<W> FromIterator<(VertexId, VertexId, W)> for WeightedDirectedGraph<W> {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId, W)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
