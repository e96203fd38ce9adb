// src/db/stats.rs
use crate::db::connection::Database;
use crate::errors::{DigestError, DigestResult};
use crate::stats::{StatSnapshot, StatStore};
use rusqlite::{params, Connection, OptionalExtension};

const EMAILS_SENT: &str = "emails_sent";
const APPLICATIONS_SENT: &str = "applications_sent";

/// `StatStore` over the `stats` table. Both counters move in one transaction.
#[derive(Debug, Clone)]
pub struct SqliteStats {
    db: Database,
}

impl SqliteStats {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn bump(conn: &Connection, key: &str, by: u64) -> DigestResult<()> {
    let by = i64::try_from(by)
        .map_err(|_| DigestError::DbError(format!("{key} increment {by} out of range")))?;

    conn.execute(
        r#"
        INSERT INTO stats (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = value + excluded.value
        "#,
        params![key, by],
    )
    .map_err(|e| DigestError::DbError(format!("update {key} failed: {e}")))?;
    Ok(())
}

fn read(conn: &Connection, key: &str) -> DigestResult<u64> {
    let value: Option<i64> = conn
        .query_row(
            "SELECT value FROM stats WHERE key = ?1",
            params![key],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| DigestError::DbError(format!("read {key} failed: {e}")))?;

    Ok(value.map_or(0, |v| v.max(0) as u64))
}

impl StatStore for SqliteStats {
    fn add(&self, emails_sent: u64, applications_sent: u64) -> DigestResult<()> {
        self.db.with_conn(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| DigestError::DbError(e.to_string()))?;

            bump(&tx, EMAILS_SENT, emails_sent)?;
            bump(&tx, APPLICATIONS_SENT, applications_sent)?;

            tx.commit().map_err(|e| DigestError::DbError(e.to_string()))
        })
    }

    fn snapshot(&self) -> DigestResult<StatSnapshot> {
        self.db.with_conn(|conn| {
            Ok(StatSnapshot {
                emails_sent: read(conn, EMAILS_SENT)?,
                applications_sent: read(conn, APPLICATIONS_SENT)?,
            })
        })
    }
}
