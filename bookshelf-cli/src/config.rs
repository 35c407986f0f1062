//! Startup configuration: `.env` loading and shared argument groups
//!
//! Everything is read once at startup; there is no reload.

use std::time::Duration;

use bookshelf_server::db::DatabaseConfig;
use bookshelf_server::reviews::{ReviewClientConfig, DEFAULT_TIMEOUT_SECS, NYT_REVIEWS_URL};
use clap::Args;
use tracing::debug;

/// Load `.env` from the current directory, if present.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded .env from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using environment only"),
        Err(e) => debug!("Failed to load .env: {}", e),
    }
}

/// Catalog database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database (schema) name
    #[arg(long, env = "DB_NAME", default_value = "goodreads")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_CONNECTION_LIMIT", default_value_t = 4)]
    pub db_connections: u32,
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            database: args.db_name,
            max_connections: args.db_connections,
        }
    }
}

/// NYT review API arguments
#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    /// NYT Books API key
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Review endpoint URL
    #[arg(long, env = "REVIEWS_URL", default_value = NYT_REVIEWS_URL)]
    pub reviews_url: String,

    /// Review request timeout in seconds
    #[arg(long, env = "REVIEWS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub reviews_timeout: u64,
}

impl From<ReviewArgs> for ReviewClientConfig {
    fn from(args: ReviewArgs) -> Self {
        Self {
            base_url: args.reviews_url,
            api_key: args.api_key,
            timeout: Duration::from_secs(args.reviews_timeout),
        }
    }
}
