//! HTTP server command
//!
//! Opens the pool, checks the database, serves until shutdown, then
//! closes the pool.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::{create_pool, ping, DatabaseConfig, MySqlBookCatalog};
use bookshelf_server::http::{run_server, AppState, ServerConfig};
use bookshelf_server::reviews::{NytReviewClient, ReviewClientConfig};

use crate::config::{DatabaseArgs, ReviewArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides --port / PORT)
    #[arg(value_name = "PORT")]
    pub port_arg: Option<u16>,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Start without pinging the database first
    #[arg(long)]
    pub skip_ping: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub reviews: ReviewArgs,
}

impl ServeArgs {
    fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port_arg.unwrap_or(self.port))
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = args.bind_addr();
    let db_config = DatabaseConfig::from(args.db);
    let review_config = ReviewClientConfig::from(args.reviews);

    if review_config.api_key.is_empty() {
        tracing::warn!("API_KEY is not set; review lookups will be rejected upstream");
    }

    tracing::debug!(?db_config, "database configuration");
    let pool = create_pool(&db_config);

    if !args.skip_ping {
        tracing::info!("Pinging database...");
        if let Err(e) = ping(&pool).await {
            pool.close().await;
            return Err(e).with_context(|| {
                format!("Cannot ping database at {}:{}", db_config.host, db_config.port)
            });
        }
    }

    let reviews = NytReviewClient::new(review_config).context("Failed to build review client")?;
    let state = AppState::new(
        Arc::new(MySqlBookCatalog::new(pool.clone())),
        Arc::new(reviews),
    );

    tracing::info!("Starting bookshelf server on {}", bind_addr);
    let result = run_server(state, ServerConfig { bind_addr }).await;

    tracing::info!("Closing database pool");
    pool.close().await;

    result.context("Server error")
}
