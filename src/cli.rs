use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphsort")]
#[command(about = "Graph algorithms served over CLI and MCP")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "graphsort=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Topologically sort the graph described by a JSON request
    Sort {
        /// Request file (reads stdin when omitted or "-")
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// Call a registered method with a JSON request
    Call {
        /// Method name, e.g. "TopologicalSort"
        method: String,
        /// Request file (reads stdin when omitted or "-")
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// List registered methods
    Methods,

    /// Start MCP server
    Mcp,
}
