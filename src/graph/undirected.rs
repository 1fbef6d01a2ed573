use super::vertices::AdjacencyMap;
use super::{Graph, UnweightedGraph, VertexId, Vertices};
use crate::error::{GraphError, Result};
use std::collections::HashSet;

/// Simple undirected graph.
///
/// Adjacency is symmetric after every public operation:
/// `b ∈ edges(a) ⇔ a ∈ edges(b)`. A self-loop is a single membership of
/// `a` in its own set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    edges: AdjacencyMap,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for UndirectedGraph {
    fn add_vertex(&mut self, id: VertexId) {
        self.edges.entry(id).or_default();
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.edges.contains_key(&id)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edges
            .get(&from)
            .is_some_and(|neighbours| neighbours.contains(&to))
    }

    fn remove_vertex(&mut self, id: VertexId) {
        // Taking the entry out first leaves nothing borrowed while the
        // back-references are cleaned up.
        let Some(neighbours) = self.edges.remove(&id) else {
            return;
        };

        for neighbour in neighbours {
            if neighbour == id {
                continue;
            }
            if let Some(back) = self.edges.get_mut(&neighbour) {
                back.remove(&id);
            }
        }
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        if let Some(neighbours) = self.edges.get_mut(&from) {
            neighbours.remove(&to);
        }
        if let Some(neighbours) = self.edges.get_mut(&to) {
            neighbours.remove(&from);
        }
    }

    fn edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.edges.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    fn incoming_edges(&self, id: VertexId) -> Result<&HashSet<VertexId>> {
        self.edges(id)
    }

    fn vertices(&self) -> Vertices<'_> {
        Vertices::new(&self.edges)
    }

    fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    fn num_edges(&self) -> usize {
        self.edges
            .iter()
            .map(|(&id, neighbours)| neighbours.iter().filter(|&&n| n >= id).count())
            .sum()
    }
}

impl UnweightedGraph for UndirectedGraph {
    fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.edges.entry(from).or_default().insert(to);
        self.edges.entry(to).or_default().insert(from);
    }
}

impl Extend<(VertexId, VertexId)> for UndirectedGraph {
    fn extend<I: IntoIterator<Item = (VertexId, VertexId)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl FromIterator<(VertexId, VertexId)> for UndirectedGraph {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(graph: &UndirectedGraph) {
        for id in graph.vertices() {
            for &n in graph.edges(id).unwrap() {
                assert!(graph.has_edge(n, id), "{n} missing back edge to {id}");
            }
        }
    }

    #[test]
    fn test_add_vertex() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(1);
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(2));
        assert!(graph.edges(1).unwrap().is_empty());
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(1, 2);
        let before = graph.clone();
        graph.add_vertex(1);
        graph.add_vertex(1);
        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(1, 2);
        assert!(graph.has_vertex(1));
        assert!(graph.has_vertex(2));
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
        assert_eq!(graph.num_edges(), 1);

        graph.add_edge(2, 1);
        assert_eq!(graph.num_edges(), 1);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(5, 5);
        assert!(graph.has_edge(5, 5));
        assert_eq!(graph.edges(5).unwrap().len(), 1);
        assert_eq!(graph.num_edges(), 1);

        graph.remove_vertex(5);
        assert!(!graph.has_vertex(5));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_remove_vertex_cascades() {
        // Vertices {1,2,3}, edge (1,2), then vertex 2 removed
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_vertex(3);
        graph.add_edge(1, 2);

        graph.remove_vertex(2);

        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert!(graph.has_vertex(1));
        assert!(!graph.has_vertex(2));
        assert!(graph.has_vertex(3));
        assert!(graph.edges(1).unwrap().is_empty());
    }

    #[test]
    fn test_remove_vertex_leaves_other_edges() {
        let mut graph: UndirectedGraph = [(1, 2), (2, 3), (3, 4), (4, 1), (2, 2)]
            .into_iter()
            .collect();

        graph.remove_vertex(2);

        assert_eq!(graph.num_vertices(), 3);
        assert!(graph.has_edge(3, 4));
        assert!(graph.has_edge(4, 1));
        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(3, 2));
        assert_eq!(graph.num_edges(), 2);
        assert_symmetric(&graph);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut graph: UndirectedGraph = [(1, 2)].into_iter().collect();
        let before = graph.clone();
        graph.remove_vertex(42);
        graph.remove_edge(1, 3);
        graph.remove_edge(7, 8);
        assert_eq!(graph, before);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph: UndirectedGraph = [(1, 2), (1, 3)].into_iter().collect();
        graph.remove_edge(2, 1);
        assert!(!graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert!(graph.has_edge(1, 3));
        assert!(graph.has_vertex(2));
        assert_symmetric(&graph);
    }

    #[test]
    fn test_edges_not_found() {
        let graph = UndirectedGraph::new();
        assert!(matches!(graph.edges(1), Err(GraphError::VertexNotFound(1))));
        assert!(matches!(
            graph.incoming_edges(9),
            Err(GraphError::VertexNotFound(9))
        ));
    }

    #[test]
    fn test_incoming_edges_match_edges() {
        let graph: UndirectedGraph = [(1, 2), (1, 3)].into_iter().collect();
        assert_eq!(graph.edges(1).unwrap(), graph.incoming_edges(1).unwrap());
        assert_eq!(graph.edges(1).unwrap().len(), 2);
    }

    #[test]
    fn test_vertices() {
        let mut graph = UndirectedGraph::new();
        for id in [4, 8, 15, 16, 23, 42] {
            graph.add_vertex(id);
        }
        let mut ids: Vec<VertexId> = graph.vertices().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![4, 8, 15, 16, 23, 42]);
        assert_eq!(graph.num_vertices(), 6);
        assert_eq!(graph.vertices().len(), 6);
    }
}
