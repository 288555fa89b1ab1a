//! Database connection pool management.
//!
//! Referential integrity across the seven tables is enforced by Postgres
//! itself on every connection — unlike engines that need an explicit
//! per-session pragma, there is nothing to toggle here; foreign-key
//! constraints declared in the schema apply unconditionally.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions};

use crate::adapters::persistence::error::PersistenceError;

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Connection pool manager. Every repository holds a clone of this.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str, config: PoolConfig) -> Result<Self, PersistenceError> {
        if database_url.is_empty() {
            return Err(PersistenceError::connection("database URL cannot be empty"));
        }

        let connect_options = PgConnectOptions::from_str(database_url)
            .map_err(|e| PersistenceError::connection(format!("invalid database url: {e}")))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(Some(config.idle_timeout))
            .max_lifetime(Some(config.max_lifetime))
            .connect_with(connect_options)
            .await
            .map_err(|e| PersistenceError::connection(format!("failed to create connection pool: {e}")))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(|e| PersistenceError::connection(format!("failed to test connection: {e}")))?;

        Ok(Self { pool })
    }

    pub async fn new_default(database_url: &str) -> Result<Self, PersistenceError> {
        Self::new(database_url, PoolConfig::default()).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn acquire(&self) -> Result<PgConnection, PersistenceError> {
        self.pool
            .acquire()
            .await
            .map(|conn| conn.detach())
            .map_err(|e| PersistenceError::connection(format!("failed to acquire connection: {e}")))
    }

    pub async fn shutdown(&self) {
        self.pool.close().await;
    }

    pub fn pool_stats(&self) -> PoolStats {
        let size = self.pool.size();
        PoolStats { num_idle: self.pool.num_idle() as u32, pool_size: size }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    pub num_idle: u32,
    pub pool_size: u32,
}
