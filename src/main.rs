use clap::Parser;
use graphsort::cli::{Cli, Commands};
use graphsort::cli_handlers;
use graphsort::mcp::run_mcp_server;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr: stdout carries JSON replies and the MCP transport
    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sort { input } => cli_handlers::handle_sort(input.as_deref()),
        Commands::Call { method, input } => cli_handlers::handle_call(&method, input.as_deref()),
        Commands::Methods => cli_handlers::handle_methods(),
        Commands::Mcp => {
            if let Err(e) = run_mcp_server().await {
                eprintln!("MCP server error: {e}");
                process::exit(1);
            }
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
