//! # Charsheet Server
//!
//! A tabletop RPG character sheet server.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool and migrations
//! - HTTP server (REST + GraphQL)

use anyhow::Result;
use tracing::info;

use charsheet_server::config::Settings;
use charsheet_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    charsheet_server::telemetry::init_tracing(&settings.environment);

    info!("Starting Charsheet Server...");
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
