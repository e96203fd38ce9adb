// errors.rs
use thiserror::Error;

/// Errors raised while composing, recording or delivering a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Caller handed us something we cannot build a digest from.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The text and HTML bodies disagree. Should never happen.
    #[error("Rendering inconsistency: {0}")]
    RenderingInconsistency(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// The transport accepted the message but counters or the watermark
    /// could not be stored. Not a reason to send again.
    #[error("Digest sent but not recorded: {0}")]
    SentNotRecorded(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DigestResult<T> = Result<T, DigestError>;
