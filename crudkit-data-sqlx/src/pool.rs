//! SQLite pool setup and schema bootstrap.

use std::str::FromStr;

use crudkit_data::DataError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::SqlxErrorExt;

/// Open a pool for `url`, creating the database file if it is missing.
///
/// An in-memory database lives and dies with its connection, so for
/// `sqlite::memory:` style URLs the pool holds exactly one connection that is
/// never reaped.
pub async fn connect(url: &str) -> Result<SqlitePool, DataError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(SqlxErrorExt::into_data_error)?
        .create_if_missing(true);
    let pool = pool_options(url)
        .connect_with(options)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;
    let max_connections = pool.options().get_max_connections();
    tracing::info!(url, max_connections, "database pool ready");
    Ok(pool)
}

fn pool_options(url: &str) -> SqlitePoolOptions {
    if is_memory_url(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Execute `CREATE TABLE IF NOT EXISTS ...` style statements in order.
pub async fn ensure_schema(pool: &SqlitePool, statements: &[&str]) -> Result<(), DataError> {
    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
    }
    tracing::debug!(statements = statements.len(), "schema ensured");
    Ok(())
}
