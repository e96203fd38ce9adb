//! Planning alert digests: compose the email a subscriber gets when new
//! planning applications (or comments on ones they already know about) turn
//! up near their alert, then record that it went out.
//!
//! The composer is pure. Storage of alerts and counters, and the mail
//! transport, are collaborators behind traits:
//!
//! - [`stats::StatStore`] for the emails/applications counters
//! - [`db::AlertRepository`] for the `last_sent` watermark
//! - [`mailer::Transport`] for actual delivery

pub mod config;
pub mod db;
pub mod digest;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod links;
pub mod mailer;
pub mod stats;
pub mod templates;

#[cfg(test)]
mod tests;

pub use config::DigestConfig;
pub use digest::DigestComposer;
pub use dispatch::Dispatcher;
pub use domain::{Alert, ApplicationSummary, CommentSummary, ComposedMessage};
pub use errors::{DigestError, DigestResult};
pub use stats::record_delivery;
