// src/db/alerts.rs
use crate::db::connection::Database;
use crate::domain::Alert;
use crate::errors::{DigestError, DigestResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

/// Read access to alerts plus the one write the digest flow is allowed:
/// moving `last_sent`.
pub trait AlertRepository: Send + Sync {
    fn find_alert(&self, id: i64) -> DigestResult<Option<Alert>>;

    fn update_last_sent(&self, id: i64, at: DateTime<Utc>) -> DigestResult<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteAlerts {
    db: Database,
}

impl SqliteAlerts {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn alert_from_row(row: &Row<'_>) -> rusqlite::Result<Alert> {
    Ok(Alert {
        id: row.get(0)?,
        email: row.get(1)?,
        address: row.get(2)?,
        lat: row.get(3)?,
        lng: row.get(4)?,
        radius_meters: row.get(5)?,
        confirm_id: row.get(6)?,
        last_sent: row.get(7)?,
    })
}

impl AlertRepository for SqliteAlerts {
    fn find_alert(&self, id: i64) -> DigestResult<Option<Alert>> {
        self.db.with_conn(|conn| {
            conn.query_row(
                r#"
                SELECT id, email, address, lat, lng, radius_meters, confirm_id, last_sent
                FROM alerts
                WHERE id = ?1
                "#,
                params![id],
                alert_from_row,
            )
            .optional()
            .map_err(|e| DigestError::DbError(format!("load alert {id} failed: {e}")))
        })
    }

    fn update_last_sent(&self, id: i64, at: DateTime<Utc>) -> DigestResult<()> {
        self.db.with_conn(|conn| {
            let changed = conn
                .execute(
                    "UPDATE alerts SET last_sent = ?1 WHERE id = ?2",
                    params![at, id],
                )
                .map_err(|e| DigestError::DbError(format!("update last_sent failed: {e}")))?;

            if changed == 0 {
                return Err(DigestError::DbError(format!("no alert with id {id}")));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
impl SqliteAlerts {
    /// Stands in for the registration flow, which owns alert rows.
    pub(crate) fn save_alert(&self, alert: &Alert) -> DigestResult<()> {
        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO alerts (
                  id, email, address, lat, lng, radius_meters, confirm_id, last_sent
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                ON CONFLICT(id) DO UPDATE SET
                  email = excluded.email,
                  address = excluded.address,
                  lat = excluded.lat,
                  lng = excluded.lng,
                  radius_meters = excluded.radius_meters,
                  confirm_id = excluded.confirm_id,
                  last_sent = excluded.last_sent
                "#,
                params![
                    alert.id,
                    alert.email,
                    alert.address,
                    alert.lat,
                    alert.lng,
                    alert.radius_meters,
                    alert.confirm_id,
                    alert.last_sent,
                ],
            )
            .map_err(|e| DigestError::DbError(format!("save alert {} failed: {e}", alert.id)))?;
            Ok(())
        })
    }
}
