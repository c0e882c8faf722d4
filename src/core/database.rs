//! Read-only access to the DuckDB data source.
//!
//! The database file is opened once at startup. Every query clones a
//! connection from that instance and runs on the blocking thread pool, so
//! request tasks never hold the shared handle while a statement executes.

use std::path::Path;
use std::sync::{Arc, Mutex};

use duckdb::types::Value;
use duckdb::{params_from_iter, AccessMode, Connection, Row};

use crate::core::config::DatabaseConfig;
use crate::core::error::{AppError, Result};

/// Maps a result row onto an entity
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self>;
}

/// Shared handle to the analytical store
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open the configured database file in read-only mode and verify it answers queries.
    pub fn open_read_only(config: &DatabaseConfig) -> duckdb::Result<Self> {
        let connection = open_connection(&config.path)?;
        Ok(Self::from_connection(connection))
    }

    /// Wrap an already opened connection (in-memory databases in tests).
    pub fn from_connection(connection: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(connection)),
        }
    }

    /// Run `f` against a fresh connection on the blocking pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> duckdb::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let connection = conn
                .lock()
                .map_err(|_| AppError::Internal("database handle lock poisoned".to_string()))?
                .try_clone()?;
            f(&connection).map_err(AppError::from)
        })
        .await
        .map_err(|e| AppError::Internal(format!("query task failed: {}", e)))?
    }
}

fn open_connection(path: &Path) -> duckdb::Result<Connection> {
    let flags = duckdb::Config::default().access_mode(AccessMode::ReadOnly)?;
    let connection = Connection::open_with_flags(path, flags)?;
    connection.execute_batch("PRAGMA disable_progress_bar;")?;
    connection.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))?;
    Ok(connection)
}

pub fn fetch_all<T: FromRow>(conn: &Connection, sql: &str, params: &[Value]) -> duckdb::Result<Vec<T>> {
    tracing::debug!(sql, ?params, "fetch_all");
    let mut statement = conn.prepare(sql)?;
    let rows = statement.query_map(params_from_iter(params.iter()), |row| T::from_row(row))?;
    rows.collect()
}

pub fn fetch_optional<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[Value],
) -> duckdb::Result<Option<T>> {
    tracing::debug!(sql, ?params, "fetch_optional");
    let mut statement = conn.prepare(sql)?;
    let mut rows = statement.query(params_from_iter(params.iter()))?;
    match rows.next()? {
        Some(row) => T::from_row(row).map(Some),
        None => Ok(None),
    }
}

pub fn fetch_one<T: FromRow>(conn: &Connection, sql: &str, params: &[Value]) -> duckdb::Result<T> {
    tracing::debug!(sql, ?params, "fetch_one");
    conn.query_row(sql, params_from_iter(params.iter()), |row| T::from_row(row))
}

pub fn fetch_count(conn: &Connection, sql: &str, params: &[Value]) -> duckdb::Result<i64> {
    tracing::debug!(sql, ?params, "fetch_count");
    conn.query_row(sql, params_from_iter(params.iter()), |row| row.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_fails() {
        let temp = tempdir().expect("tempdir");
        let config = DatabaseConfig {
            path: temp.path().join("missing.db"),
        };
        assert!(Database::open_read_only(&config).is_err());
    }

    #[tokio::test]
    async fn test_open_read_only_rejects_writes() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("opendata.db");
        {
            let conn = Connection::open(&path).expect("create db");
            conn.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1), (2);")
                .expect("seed");
        }

        let database = Database::open_read_only(&DatabaseConfig { path }).expect("open");

        let count = database
            .run(|conn| fetch_count(conn, "SELECT COUNT(*) FROM t", &[]))
            .await
            .expect("count");
        assert_eq!(count, 2);

        let write = database
            .run(|conn| conn.execute_batch("INSERT INTO t VALUES (3)"))
            .await;
        assert!(matches!(write, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_bound_params_are_not_interpolated() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        conn.execute_batch("CREATE TABLE t (name VARCHAR); INSERT INTO t VALUES ('a');")
            .expect("seed");
        let database = Database::from_connection(conn);

        let count = database
            .run(|conn| {
                fetch_count(
                    conn,
                    "SELECT COUNT(*) FROM t WHERE name = ?",
                    &[Value::Text("' OR 1=1 --".to_string())],
                )
            })
            .await
            .expect("count");
        assert_eq!(count, 0);
    }
}
