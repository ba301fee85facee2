//! illustrator-mcp: MCP server for Adobe Illustrator over stdio

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use illustrator_mcp::{
    automation::create_channel,
    config::ServerArgs,
    mcp::{IllustratorMcpServer, shutdown_requested},
    telemetry::Telemetry,
};
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerArgs::parse().into_config()?;
    let telemetry = Arc::new(Telemetry::init(&config)?);

    info!("Starting Illustrator MCP server v{}", env!("CARGO_PKG_VERSION"));
    info!("Protocol: Model Context Protocol (MCP)");
    info!("Transport: stdio");

    let channel = create_channel(&config);
    info!(
        "Automation channel: {} (window '{}', settle {} ms, JPEG quality {})",
        channel.name(),
        config.window_title,
        config.settle_delay.as_millis(),
        config.jpeg_quality
    );
    info!("Script directory: {:?}", config.script_dir);

    let server = IllustratorMcpServer::from_channel(channel, &config, telemetry);
    let service = server.serve(stdio()).await?;

    info!("Illustrator MCP server initialized");
    info!("Waiting for MCP requests...");

    tokio::select! {
        result = service.waiting() => {
            result?;
            info!("Client closed the connection");
        }
        () = shutdown_requested(tokio::signal::ctrl_c()) => {}
    }

    info!("Illustrator MCP server shutting down");
    Ok(())
}
