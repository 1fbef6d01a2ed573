//! Invariant checks over generated sequences of graph operations.

use graphsort::{
    DirectedGraph, Graph, GraphError, UndirectedGraph, UnweightedGraph, VertexId,
    WeightedDirectedGraph, WeightedGraph, WeightedUndirectedGraph, topological_sort,
    try_topological_sort,
};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const UNIVERSE: usize = 12;

fn check_undirected<G: Graph>(graph: &G) {
    for a in graph.vertices() {
        for &b in graph.edges(a).unwrap() {
            assert!(graph.has_vertex(b));
            assert!(graph.has_edge(b, a), "asymmetric edge {a} - {b}");
        }
    }
}

fn check_directed<G: Graph>(graph: &G) {
    for a in graph.vertices() {
        for &b in graph.edges(a).unwrap() {
            assert!(graph.incoming_edges(b).unwrap().contains(&a));
        }
        for &b in graph.incoming_edges(a).unwrap() {
            assert!(graph.edges(b).unwrap().contains(&a));
        }
    }
}

fn check_weights<G: WeightedGraph>(graph: &G, universe: usize) {
    for a in 0..universe {
        for b in 0..universe {
            match graph.edge_weight(a, b) {
                Ok(_) => assert!(graph.has_edge(a, b)),
                Err(e) => {
                    assert!(e.is_not_found());
                    assert!(!graph.has_edge(a, b));
                }
            }
        }
    }
}

// Operation codes: 0 add vertex, 1-2 add edge, 3 remove edge, 4 remove vertex
fn operations() -> impl Strategy<Value = Vec<(u8, VertexId, VertexId)>> {
    prop::collection::vec((0u8..5, 0..UNIVERSE, 0..UNIVERSE), 0..=200)
}

// A hidden rank permutation plus candidate edges; only edges going forward
// in rank are kept, so the resulting graph is acyclic.
fn ranked_dag() -> impl Strategy<Value = (Vec<VertexId>, Vec<(VertexId, VertexId)>)> {
    (1usize..40).prop_flat_map(|n| {
        (
            Just((0..n).collect::<Vec<VertexId>>()).prop_shuffle(),
            prop::collection::vec((0..n, 0..n), 0..=n * 2),
        )
    })
}

fn build_dag(rank: &[VertexId], pairs: &[(VertexId, VertexId)]) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for v in 0..rank.len() {
        graph.add_vertex(v);
    }
    for &(a, b) in pairs {
        if rank[a] < rank[b] {
            graph.add_edge(a, b);
        }
    }
    graph
}

proptest! {
    #[test]
    fn prop_operations_keep_invariants(ops in operations()) {
        let mut undirected = UndirectedGraph::new();
        let mut directed = DirectedGraph::new();
        let mut weighted = WeightedUndirectedGraph::new();
        let mut weighted_directed = WeightedDirectedGraph::new();

        for (step, (op, a, b)) in ops.into_iter().enumerate() {
            match op {
                0 => {
                    undirected.add_vertex(a);
                    directed.add_vertex(a);
                    weighted.add_vertex(a);
                    weighted_directed.add_vertex(a);
                }
                1 | 2 => {
                    undirected.add_edge(a, b);
                    directed.add_edge(a, b);
                    weighted.add_edge(a, b, step);
                    weighted_directed.add_edge(a, b, step);
                }
                3 => {
                    undirected.remove_edge(a, b);
                    directed.remove_edge(a, b);
                    weighted.remove_edge(a, b);
                    weighted_directed.remove_edge(a, b);
                }
                _ => {
                    undirected.remove_vertex(a);
                    directed.remove_vertex(a);
                    weighted.remove_vertex(a);
                    weighted_directed.remove_vertex(a);
                }
            }

            check_undirected(&undirected);
            check_undirected(&weighted);
            check_directed(&directed);
            check_directed(&weighted_directed);
            check_weights(&weighted, UNIVERSE);
            check_weights(&weighted_directed, UNIVERSE);

            prop_assert_eq!(&undirected, weighted.as_unweighted());
            prop_assert_eq!(&directed, weighted_directed.as_unweighted());
        }
    }

    #[test]
    fn prop_sort_orders_every_dag((rank, pairs) in ranked_dag()) {
        let n = rank.len();
        let graph = build_dag(&rank, &pairs);

        let order = topological_sort(&graph);
        prop_assert_eq!(order.len(), n);
        let position: HashMap<VertexId, usize> =
            order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        prop_assert_eq!(position.len(), n);
        for a in graph.vertices() {
            for &b in graph.edges(a).unwrap() {
                prop_assert!(position[&a] < position[&b], "edge {} -> {} in {:?}", a, b, order);
            }
        }
    }

    #[test]
    fn prop_sort_detects_closed_loop((rank, pairs) in ranked_dag()) {
        let mut graph = build_dag(&rank, &pairs);

        // Closing any forward edge into a loop must be detected
        let edge = graph
            .vertices()
            .find_map(|a| graph.edges(a).unwrap().iter().next().map(|&b| (a, b)));
        if let Some((a, b)) = edge {
            graph.add_edge(b, a);
            prop_assert_eq!(try_topological_sort(&graph), None);
            prop_assert!(topological_sort(&graph).is_empty());
        }
    }
}

#[test]
fn test_remove_vertex_touches_only_incident_edges() {
    let edges = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (2, 4)];
    let mut graph: DirectedGraph = edges.into_iter().collect();

    graph.remove_vertex(2);

    for (from, to) in edges {
        let incident = from == 2 || to == 2;
        assert_eq!(graph.has_edge(from, to), !incident, "edge {from} -> {to}");
    }
    for v in [1, 3, 4, 5] {
        assert!(graph.has_vertex(v));
    }
}

#[test]
fn test_accessors_report_not_found() {
    let graph = WeightedDirectedGraph::<u8>::new();
    assert!(matches!(graph.edges(3), Err(GraphError::VertexNotFound(3))));
    assert!(matches!(
        graph.incoming_edges(3),
        Err(GraphError::VertexNotFound(3))
    ));
    assert!(matches!(
        graph.edge_weight(3, 4),
        Err(GraphError::EdgeNotFound { from: 3, to: 4 })
    ));
}

#[test]
fn test_vertices_view_is_restartable() {
    let graph: UndirectedGraph = [(1, 2), (3, 4), (5, 5)].into_iter().collect();
    let first: HashSet<VertexId> = graph.vertices().collect();
    let second: HashSet<VertexId> = graph.vertices().collect();
    assert_eq!(first, second);
    assert_eq!(first, HashSet::from([1, 2, 3, 4, 5]));
    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.num_edges(), 3);
}
