use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Configuration for the SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_path: String,
    pub max_connections: u32,
    pub create_if_missing: bool,
    pub acquire_timeout_seconds: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: "samplestat.db".to_string(),
            max_connections: 1,
            create_if_missing: true,
            acquire_timeout_seconds: 5,
        }
    }
}

impl SqliteConfig {
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

/// Create a SQLite connection pool with default settings
pub async fn create_pool(database_path: &str) -> Result<SqlitePool> {
    let config = SqliteConfig::new(database_path);
    create_pool_with_config(&config).await
}

/// Create a SQLite connection pool with custom configuration
pub async fn create_pool_with_config(config: &SqliteConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect_with(options)
        .await?;

    tracing::info!(
        "SQLite connection pool created (path: {}, max: {})",
        config.database_path,
        config.max_connections
    );

    Ok(pool)
}

/// Open a private in-memory database.
///
/// Every SQLite in-memory connection is its own database, so the pool is
/// pinned to one connection that is never reaped.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Health check for database connection
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;

    tracing::debug!("Database health check passed");
    Ok(())
}

/// Get database pool statistics
pub fn pool_status(pool: &SqlitePool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle();
    PoolStatus {
        size,
        idle,
        active: (size as usize).saturating_sub(idle),
    }
}

#[derive(Debug, Clone)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
    pub active: usize,
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool(size: {}, active: {}, idle: {})",
            self.size, self.active, self.idle
        )
    }
}
