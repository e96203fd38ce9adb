use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;
use tracing::info;

use crate::errors::{DigestError, DigestResult};

// Thread-local connection slot, remembered together with the path it was
// opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

#[derive(Debug, Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> DigestResult<T>
    where
        F: FnOnce(&mut Connection) -> DigestResult<T>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| DigestError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(DigestError::DbError("connection slot empty".into())),
                }
            })
            .map_err(|_| DigestError::DbError("connection slot unavailable".into()))?
    }
}

/// Initialize database from a SQL schema file
pub fn init_db(db: &Database, schema_path: &str) -> DigestResult<()> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| DigestError::DbError(format!("Failed to read schema file: {e}")))?;

    apply_schema(db, &schema_sql)?;

    info!(schema = schema_path, db = db.path(), "database initialized");
    Ok(())
}

pub fn apply_schema(db: &Database, schema_sql: &str) -> DigestResult<()> {
    db.with_conn(|conn| {
        conn.execute_batch(schema_sql)
            .map_err(|e| DigestError::DbError(format!("Failed to apply schema: {e}")))
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::make_test_db;
    use super::*;

    #[test]
    fn switching_paths_reopens_the_connection() {
        let a = make_test_db("conn_a");
        let b = make_test_db("conn_b");

        a.with_conn(|conn| {
            conn.execute("update stats set value = 5 where key = 'emails_sent'", [])
                .map_err(|e| DigestError::DbError(e.to_string()))?;
            Ok(())
        })
        .unwrap();

        let in_b: i64 = b
            .with_conn(|conn| {
                conn.query_row("select value from stats where key = 'emails_sent'", [], |r| {
                    r.get(0)
                })
                .map_err(|e| DigestError::DbError(e.to_string()))
            })
            .unwrap();
        assert_eq!(in_b, 0);
    }

    #[test]
    fn init_db_reports_missing_schema_file() {
        let db = make_test_db("conn_missing");
        match init_db(&db, "sql/does_not_exist.sql") {
            Err(DigestError::DbError(msg)) => assert!(msg.contains("schema file")),
            other => panic!("expected DbError, got: {:?}", other),
        }
    }
}
