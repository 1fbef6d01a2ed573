use crate::graph::VertexId;
use thiserror::Error;

/// All possible errors in graph construction, querying and method dispatch
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {from} -> {to} not found")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MCP error: {0}")]
    Mcp(String),
}

impl GraphError {
    /// Stable machine-readable code used in MCP error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::VertexNotFound(_) => "VertexNotFound",
            GraphError::EdgeNotFound { .. } => "EdgeNotFound",
            GraphError::InvalidRequest(_) => "InvalidRequest",
            GraphError::UnknownMethod(_) => "UnknownMethod",
            GraphError::Io(_) => "Io",
            GraphError::Json(_) => "Json",
            GraphError::Mcp(_) => "Mcp",
        }
    }

    /// True for the NotFound family raised by graph accessors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GraphError>;
