use crate::graph::VertexId;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// One edge record of a request payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct EdgeRecord {
    pub start: VertexId,
    pub end: VertexId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Graph description sent by a client.
///
/// `id` is an opaque tag that is echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GraphRequest {
    pub id: serde_json::Value,
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeRecord>,
}

/// Ordered vertex ids returned to the client, tagged with the request id.
///
/// An empty `result` for a non-empty request means the graph had a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortResponse {
    pub id: serde_json::Value,
    pub result: Vec<VertexId>,
}
