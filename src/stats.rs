// src/stats.rs
use crate::domain::Alert;
use crate::errors::{DigestError, DigestResult};
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatSnapshot {
    pub emails_sent: u64,
    pub applications_sent: u64,
}

/// Cumulative delivery counters. Implementations must apply both increments
/// of one `add` call as a unit, and must be safe to call from several
/// threads at once.
pub trait StatStore: Send + Sync {
    fn add(&self, emails_sent: u64, applications_sent: u64) -> DigestResult<()>;

    fn snapshot(&self) -> DigestResult<StatSnapshot>;
}

/// Process-local counters for previews and tests.
#[derive(Debug, Default)]
pub struct InMemoryStats {
    counts: Mutex<StatSnapshot>,
}

impl InMemoryStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatStore for InMemoryStats {
    fn add(&self, emails_sent: u64, applications_sent: u64) -> DigestResult<()> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|_| DigestError::DbError("stats lock poisoned".into()))?;
        counts.emails_sent += emails_sent;
        counts.applications_sent += applications_sent;
        Ok(())
    }

    fn snapshot(&self) -> DigestResult<StatSnapshot> {
        self.counts
            .lock()
            .map(|c| *c)
            .map_err(|_| DigestError::DbError("stats lock poisoned".into()))
    }
}

/// Record one delivered digest: one email, `application_count` applications,
/// and move the alert's watermark to `at`.
///
/// Call exactly once per message actually handed to the transport. Calling
/// it twice counts twice.
pub fn record_delivery(
    stats: &dyn StatStore,
    alert: &mut Alert,
    application_count: usize,
    at: DateTime<Utc>,
) -> DigestResult<()> {
    stats.add(1, application_count as u64)?;
    alert.last_sent = Some(at);

    debug!(alert_id = alert.id, application_count, %at, "recorded delivery");
    Ok(())
}
