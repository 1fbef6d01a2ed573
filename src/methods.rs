//! Server-side method handlers.
//!
//! Each handler takes the JSON sent by a client, runs its algorithm and
//! produces the JSON reply. The request `id` is copied to the reply as is.

use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, Graph, UnweightedGraph, topological_sort};
use crate::models::{GraphRequest, SortResponse};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Name under which [`topological_sort_method`] is registered
pub const TOPOLOGICAL_SORT: &str = "TopologicalSort";

/// All registered method names
pub const METHODS: &[&str] = &[TOPOLOGICAL_SORT];

/// Build a directed graph from a request. Edge weights are ignored.
pub fn build_directed_graph(request: &GraphRequest) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for &vertex in &request.vertices {
        graph.add_vertex(vertex);
    }
    for edge in &request.edges {
        graph.add_edge(edge.start, edge.end);
    }
    graph
}

/// Run the topological sort for an already parsed request
pub fn sort_request(request: &GraphRequest) -> SortResponse {
    debug!(
        vertices = ?request.vertices,
        edges = request.edges.len(),
        "topological sort input"
    );

    let graph = build_directed_graph(request);
    let (sources, sinks) = count_sources_and_sinks(&graph);
    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        sources,
        sinks,
        "graph built"
    );

    let result = topological_sort(&graph);

    if result.is_empty() && !graph.is_empty() {
        debug!(id = %request.id, "graph contains a cycle");
    }
    debug!(result = ?result, "topological sort result");

    SortResponse {
        id: request.id.clone(),
        result,
    }
}

/// Vertices without incoming edges and vertices without outgoing edges
pub fn count_sources_and_sinks(graph: &DirectedGraph) -> (usize, usize) {
    graph.vertices().fold((0, 0), |(sources, sinks), vertex| {
        (
            sources + usize::from(matches!(graph.in_degree(vertex), Ok(0))),
            sinks + usize::from(matches!(graph.out_degree(vertex), Ok(0))),
        )
    })
}

/// `TopologicalSort` handler: `{id, vertices, edges}` in, `{id, result}` out
pub fn topological_sort_method(input: &Value) -> Result<Value> {
    let request = parse_request(input)?;
    let response = sort_request(&request);
    Ok(serde_json::to_value(response)?)
}

/// Dispatch a request to the handler registered under `method`
pub fn call_method(method: &str, input: &Value) -> Result<Value> {
    match method {
        TOPOLOGICAL_SORT => topological_sort_method(input),
        other => Err(GraphError::UnknownMethod(other.to_string())),
    }
}

fn parse_request(input: &Value) -> Result<GraphRequest> {
    let object = input
        .as_object()
        .ok_or_else(|| GraphError::InvalidRequest("request must be a JSON object".into()))?;

    for field in ["id", "vertices", "edges"] {
        if !object.contains_key(field) {
            return Err(GraphError::InvalidRequest(format!(
                "missing field `{field}`"
            )));
        }
    }

    GraphRequest::deserialize(input).map_err(|e| GraphError::InvalidRequest(e.to_string()))
}
