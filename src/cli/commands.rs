//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::store::{create_pool, run_migrations, SqliteBookmarkStore};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let _ = dotenvy::dotenv();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(config.as_deref()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

fn load_config(config_path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    config.logging.init();
    tracing::debug!(environment = %config.environment, "configuration loaded");
    Ok(config)
}

/// Create the database file (if needed) and apply pending migrations
pub fn init(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;

    let pool = create_pool(&config.database_url)?;
    run_migrations(&pool)?;

    println!(
        "{}",
        json!({"initialized": true, "database_url": config.database_url})
    );
    Ok(())
}

/// Start the HTTP server
///
/// 1. Load configuration
/// 2. Open the connection pool and apply migrations
/// 3. Start the Axum server on the configured port
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let pool = create_pool(&config.database_url)?;
    run_migrations(&pool)?;
    let store = Arc::new(SqliteBookmarkStore::new(pool));

    tracing::info!(
        environment = %config.environment,
        database_url = %config.database_url,
        "starting bookmarkd"
    );
    let server = HttpServer::new(config.server, config.environment, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
