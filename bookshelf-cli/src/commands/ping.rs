//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::{create_pool, ping, DatabaseConfig};

use crate::config::DatabaseArgs;

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Check one connection out of a fresh pool and ping the server
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let config = DatabaseConfig::from(args.db);
    tracing::info!(host = %config.host, port = config.port, database = %config.database, "Pinging database");

    let pool = create_pool(&config);
    let result = ping(&pool).await;
    pool.close().await;
    result.with_context(|| format!("Cannot ping database at {}:{}", config.host, config.port))?;

    println!("database {}:{}/{} is reachable", config.host, config.port, config.database);
    Ok(())
}
