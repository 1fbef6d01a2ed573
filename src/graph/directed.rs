use super::vertices::AdjacencyMap;
use super::{Directed, Graph, UnweightedGraph, VertexId, Vertices};
use crate::error::{GraphError, Result};
use std::collections::HashSet;

/// Simple directed graph.
///
/// Keeps two mirrored maps: `to ∈ outgoing[from] ⇔ from ∈ incoming[to]`.
/// Every vertex has an entry in both maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    outgoing: AdjacencyMap,
    incoming: AdjacencyMap,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_degree(&self, id: VertexId) -> Result<usize> {
        self.edges(id).map(HashSet::len)
    }

    pub fn in_degree(&self, id: VertexId) -> Result<usize> {
        self.incoming_edges(id).map(HashSet::len)
    }
}

impl Graph for DirectedGraph {
    fn add_vertex(&mut self, id: VertexId) {
        self.outgoing.entry(id).or_default();
        self.incoming.entry(id).or_default();
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.outgoing.contains_key(&id)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing
            .get(&from)
            .is_some_and(|targets| targets.contains(&to))
    }

    fn remove_vertex(&mut self, id: VertexId) {
        let Some(targets) = self.outgoing.remove(&id) else {
            return;
        };
        let sources = self.incoming.remove(&id).unwrap_or_default();

        for target in targets {
            if let Some(back) = self.incoming.get_mut(&target) {
                back.remove(&id);
            }
        }
        for source in sources {
            if let Some(back) = self.outgoing.get_mut(&source) {
                back.remove(&id);
            }
        }
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        if let Some(targets) = self.outgoing.get_mut(&from) {
            targets.remove(&to);
        }
        if let Some(sources) = self.incoming.get_mut(&to) {
            sources.remove(&from);
        }
    }

    fn edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.outgoing.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    fn incoming_edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.incoming.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    fn vertices(&self) -> Vertices<'_> {
        Vertices::new(&self.outgoing)
    }

    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn num_edges(&self) -> usize {
        self.outgoing.values().map(HashSet::len).sum()
    }
}

impl UnweightedGraph for DirectedGraph {
    fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.add_vertex(from);
        self.add_vertex(to);
        self.outgoing.entry(from).or_default().insert(to);
        self.incoming.entry(to).or_default().insert(from);
    }
}

impl Directed for DirectedGraph {}

impl Extend<(VertexId, VertexId)> for DirectedGraph {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl FromIterator<(VertexId, VertexId)> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
