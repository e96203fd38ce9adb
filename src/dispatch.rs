// src/dispatch.rs
use crate::db::AlertRepository;
use crate::digest::DigestComposer;
use crate::domain::{Alert, ApplicationSummary, CommentSummary, ComposedMessage};
use crate::errors::{DigestError, DigestResult};
use crate::mailer::Transport;
use crate::stats::{record_delivery, StatStore};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Compose, hand off, then record. Statistics and the watermark only move
/// once the transport has accepted the message. Anything that fails after
/// that point comes back as `SentNotRecorded`: the email is out, so the
/// caller must not send it again.
pub struct Dispatcher<'a> {
    composer: &'a DigestComposer,
    transport: &'a dyn Transport,
    stats: &'a dyn StatStore,
    alerts: &'a dyn AlertRepository,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        composer: &'a DigestComposer,
        transport: &'a dyn Transport,
        stats: &'a dyn StatStore,
        alerts: &'a dyn AlertRepository,
    ) -> Self {
        Self {
            composer,
            transport,
            stats,
            alerts,
        }
    }

    /// Dispatch for the alert as stored, not as some caller remembers it.
    /// Returns the alert with its moved watermark alongside the message.
    pub fn dispatch_stored(
        &self,
        alert_id: i64,
        applications: &[ApplicationSummary],
        comments: &[CommentSummary],
        now: DateTime<Utc>,
    ) -> DigestResult<(Alert, ComposedMessage)> {
        let mut alert = self
            .alerts
            .find_alert(alert_id)?
            .ok_or_else(|| DigestError::InvalidInput(format!("no alert with id {alert_id}")))?;

        let message = self.dispatch(&mut alert, applications, comments, now)?;
        Ok((alert, message))
    }

    pub fn dispatch(
        &self,
        alert: &mut Alert,
        applications: &[ApplicationSummary],
        comments: &[CommentSummary],
        now: DateTime<Utc>,
    ) -> DigestResult<ComposedMessage> {
        let message = self
            .composer
            .compose(alert, applications, comments)
            .inspect_err(|e| warn!(alert_id = alert.id, error = %e, "digest not composed"))?;

        self.transport
            .deliver(&message)
            .inspect_err(|e| warn!(alert_id = alert.id, error = %e, "digest not delivered"))?;

        // Both are attempted even if the first fails.
        let counted = record_delivery(self.stats, alert, applications.len(), now);
        let persisted = self.alerts.update_last_sent(alert.id, now);
        if let Err(e) = counted.and(persisted) {
            warn!(alert_id = alert.id, error = %e, "digest sent but bookkeeping failed");
            return Err(DigestError::SentNotRecorded(format!(
                "alert {}: {e}",
                alert.id
            )));
        }

        info!(
            alert_id = alert.id,
            applications = applications.len(),
            comments = comments.len(),
            subject = message.subject(),
            "digest sent"
        );
        Ok(message)
    }
}
