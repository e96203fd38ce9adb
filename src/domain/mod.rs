pub mod alert;
pub mod application;
pub mod message;

pub use alert::{meters_in_words, Alert};
pub use application::{ApplicationSummary, CommentSummary};
pub use message::{ComposedMessage, ContentPart, TrackedLink};
