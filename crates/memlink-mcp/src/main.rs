//! memlink MCP server - mem0 memory tools over stdio.
//!
//! stdout carries the MCP transport, so all logging goes to stderr.
//! See the library docs for the environment variables it reads.

use anyhow::Result;
use memlink_core::MemlinkConfig;
use memlink_mcp::MemoryServer;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables take precedence.
    dotenvy::dotenv().ok();

    // Initialize tracing to stderr (stdout is used for MCP transport)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = MemlinkConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        user_id = %config.user_id,
        agent_id = %config.agent_id,
        auth = config.api_key.is_some(),
        "Starting memlink MCP server"
    );

    let server = MemoryServer::from_config(&config)?;

    // Serve via stdio transport
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Server error: {:?}", e);
    })?;

    tracing::info!("MCP server running on stdio");

    service.waiting().await?;
    Ok(())
}
