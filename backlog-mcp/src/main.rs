//! backlog-mcp: MCP server exposing Backlog projects and issues as tools.

mod catalog;
mod error;
mod server;

use anyhow::{Context, Result};
use backlog_api::BacklogClient;
use clap::{ArgAction, Parser};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use crate::server::BacklogMcpServer;

#[derive(Parser)]
#[command(version, about = "MCP server exposing Backlog projects and issues as tools")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr — stdout is reserved for MCP JSON-RPC protocol.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  // Configuration is read exactly once; a missing value is fatal here, not
  // a per-call error later.
  let space_url = std::env::var("BACKLOG_SPACE_URL").context("BACKLOG_SPACE_URL environment variable is required")?;
  let api_key = std::env::var("BACKLOG_API_KEY").context("BACKLOG_API_KEY environment variable is required")?;

  let client = BacklogClient::new(&space_url, &api_key);
  let server = BacklogMcpServer::new(client);

  tracing::info!("Backlog MCP server running on stdio");

  // Start MCP server on stdio
  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
