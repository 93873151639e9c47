//! # Salon Directory
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use salon_directory::config::Settings;
use salon_directory::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    salon_directory::telemetry::init_tracing();

    info!("Starting Salon Directory...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
