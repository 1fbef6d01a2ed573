use crate::error::GraphError;
use crate::methods;
use crate::models::GraphRequest;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Graph algorithms MCP server
#[derive(Clone)]
pub struct GraphSortMcp {
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CallMethodInput {
    pub method: String,
    pub request: serde_json::Value,
}

// Response type
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_to_response(e: GraphError) -> McpResponse<serde_json::Value> {
    McpResponse::error(e.code(), &e.to_string())
}

#[tool_router]
impl GraphSortMcp {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Topologically sort a directed graph. Returns the vertex ids ordered so that every edge start comes before its end, tagged with the request id. An empty result for a non-empty graph means the graph has a cycle."
    )]
    async fn topological_sort(
        &self,
        params: Parameters<GraphRequest>,
    ) -> Result<CallToolResult, McpError> {
        let response = methods::sort_request(&params.0);
        to_json(McpResponse::success(response))
    }

    #[tool(
        description = "Call a registered graph method by name (e.g. TopologicalSort) with a raw JSON request of the form {id, vertices, edges}."
    )]
    async fn call_method(
        &self,
        params: Parameters<CallMethodInput>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;

        match methods::call_method(&p.method, &p.request) {
            Ok(output) => to_json(McpResponse::success(output)),
            Err(e) => to_json(error_to_response(e)),
        }
    }

    #[tool(description = "List the names of all registered graph methods.")]
    async fn list_methods(&self) -> Result<CallToolResult, McpError> {
        to_json(McpResponse::success(methods::METHODS))
    }
}

impl Default for GraphSortMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for GraphSortMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Graph algorithms server. Describe a graph as a list of vertex ids and a list of {start, end[, weight]} edge records. \
                 Use topological_sort for a dependency order, or call_method with a method name from list_methods.".to_string()
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn startup_error(e: impl std::fmt::Display) -> GraphError {
    GraphError::Mcp(e.to_string())
}

pub async fn run_mcp_server() -> Result<(), GraphError> {
    info!("starting MCP server on stdio");

    let service = GraphSortMcp::new()
        .serve(stdio())
        .await
        .inspect_err(|e| {
            error!("Error starting MCP server: {e}");
        })
        .map_err(startup_error)?;

    service.waiting().await.map_err(startup_error)?;
    Ok(())
}
