//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use std::fmt;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};

/// Default maximum connections for the pool.
/// Kept low: every request needs at most one connection at a time.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 4;

/// Connection settings for the catalog database
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "goodreads".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Create a MySQL connection pool.
///
/// Connections are opened lazily on first checkout; call [`ping`] to
/// verify the database is reachable before serving traffic. Close the
/// pool with `pool.close().await` at shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default());
/// ping(&pool).await?;
/// ```
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .connect_lazy_with(config.connect_options())
}

/// Check one connection out, ping the server, and return it.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    tracing::debug!("database ping ok");
    Ok(())
}

/// Database settings for `--ignored` integration tests.
#[cfg(test)]
pub(crate) fn test_config() -> DatabaseConfig {
    let defaults = DatabaseConfig::default();
    DatabaseConfig {
        host: std::env::var("DB_HOST").unwrap_or(defaults.host),
        port: std::env::var("DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port),
        user: std::env::var("DB_USER").unwrap_or(defaults.user),
        password: std::env::var("DB_PASSWORD").unwrap_or_default(),
        database: std::env::var("DB_NAME").unwrap_or(defaults.database),
        max_connections: defaults.max_connections,
    }
}
