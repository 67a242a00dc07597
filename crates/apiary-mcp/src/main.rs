//! Apiary MCP Server
//!
//! Serves the built-in endpoint catalog as MCP tools over stdio.

#![forbid(unsafe_code)]

use anyhow::Result;
use apiary_client::{ApiClient, ClientConfig};
use apiary_core::EndpointRegistry;
use apiary_mcp::{ApiaryMcpServer, EndpointTools};
use clap::Parser;
use tracing::{error, info, warn};

/// Apiary MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// NewsAPI key used by the `top_news_headlines` tool
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    newsapi_key: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP stream; logs go to stderr.
    let default_filter = if args.verbose { "info,apiary=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::new();
    match args.newsapi_key.filter(|key| !key.is_empty()) {
        Some(key) => config = config.with_news_api_key(key),
        None => warn!("NEWSAPI_KEY is not set; top_news_headlines calls will be rejected upstream"),
    }

    let client = ApiClient::new(config)?;
    let registry = EndpointRegistry::builtin();
    info!(endpoints = registry.len(), "Loaded endpoint catalog");

    let server = ApiaryMcpServer::new(EndpointTools::new(registry, client));
    if let Err(e) = server.serve_stdio().await {
        error!(error = %e, "MCP server failed");
        return Err(e.into());
    }

    Ok(())
}
