//! PostgreSQL connection pool.

use std::time::Duration;

use shopgraph_core::PostgresConfig;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::info;

/// Connection pool for the relational source.
pub type DbPool = sqlx::PgPool;

/// Database error type.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection error: {source}")]
    Connection {
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to read table '{table}': {source}")]
    Scan {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    pub(crate) fn scan(table: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Scan { table, source }
    }
}

/// Open a pool against the configured database.
pub async fn init_pool(config: &PostgresConfig) -> DbResult<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.url)
        .await
        .map_err(|source| DbError::Connection { source })?;

    info!(max_connections = config.max_connections, "Connected to PostgreSQL");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_connection_error_keeps_driver_source() {
        let err = DbError::Connection { source: sqlx::Error::PoolTimedOut };
        assert!(err.to_string().starts_with("Database connection error:"));
        let source = err.source().expect("driver error is chained");
        assert!(source.downcast_ref::<sqlx::Error>().is_some());
    }

    #[test]
    fn test_scan_error_names_table() {
        let err = DbError::scan("events")(sqlx::Error::RowNotFound);
        assert!(err.to_string().contains("'events'"));
        assert!(err.source().is_some());
    }
}
