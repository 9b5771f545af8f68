//! Postgres-backed lookup.
//!
//! Queries a `places` table with one row per `(province, place_name)`
//! and validity date; historical renames keep their superseded rows, so
//! resolution orders by `valid_from` and takes the most recent record.
//!
//! Schema management and the import tooling that populates the table
//! live outside this crate; the backend only needs the two query shapes
//! of the [`PlaceLookup`] contract.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info, instrument};

use crate::{normalize_key, LookupError, PlaceCode, PlaceLookup};

/// Connection configuration for the place database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL.
    pub database_url: String,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum number of idle connections.
    pub min_connections: u32,

    /// Connection acquire timeout.
    pub acquire_timeout: Duration,

    /// Idle connection timeout.
    pub idle_timeout: Duration,

    /// Maximum lifetime of a connection.
    pub max_lifetime: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/fisco".to_string(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl DbConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/fisco".to_string());

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let min_connections = std::env::var("DB_MIN_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        Self {
            database_url,
            max_connections,
            min_connections,
            ..Default::default()
        }
    }
}

/// Place lookup backed by a Postgres `places` table.
#[derive(Clone)]
pub struct PgLookup {
    pool: PgPool,
}

impl PgLookup {
    /// Connects a new pool from the given configuration.
    pub async fn connect(config: &DbConfig) -> Result<Self, LookupError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to place database"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .max_lifetime(Some(config.max_lifetime))
            .connect(&config.database_url)
            .await
            .map_err(LookupError::Connect)?;

        info!("Place database connection pool established");

        Ok(Self { pool })
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the database is reachable.
    pub async fn health_check(&self) -> Result<(), LookupError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(LookupError::Query)?;
        Ok(())
    }
}

#[async_trait]
impl PlaceLookup for PgLookup {
    #[instrument(skip(self))]
    async fn resolve(
        &self,
        province: &str,
        place: &str,
    ) -> Result<Option<PlaceCode>, LookupError> {
        let province = normalize_key(province);
        let place = normalize_key(place);

        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT code FROM places
            WHERE UPPER(province) = $1
              AND UPPER(place_name) = $2
            ORDER BY valid_from DESC
            LIMIT 1
            "#,
        )
        .bind(&province)
        .bind(&place)
        .fetch_optional(&self.pool)
        .await
        .map_err(LookupError::Query)?;

        match row {
            Some((raw,)) => {
                debug!(%province, %place, code = %raw, "Resolved place code");
                let code =
                    PlaceCode::parse(&raw).map_err(|_| LookupError::Corrupt { code: raw })?;
                Ok(Some(code))
            }
            None => {
                debug!(%province, %place, "No place code for pair");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self), fields(code = %code))]
    async fn exists(&self, code: &PlaceCode) -> Result<bool, LookupError> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM places WHERE code = $1 LIMIT 1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(LookupError::Query)?;

        Ok(row.is_some())
    }
}
