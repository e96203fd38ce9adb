// src/domain/application.rs

use serde::{Deserialize, Serialize};

/// A planning application matched against an alert, reduced to what a
/// digest shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    /// Needed to build the tracked link. `None` for records that were never
    /// persisted; composing a digest with one of those is an error.
    pub id: Option<i64>,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Council-assigned reference, display only.
    #[serde(default)]
    pub council_reference: Option<String>,
}

impl ApplicationSummary {
    pub fn new(id: i64, address: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            address: address.into(),
            description: None,
            council_reference: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_council_reference(mut self, reference: impl Into<String>) -> Self {
        self.council_reference = Some(reference.into());
        self
    }
}

/// A new comment on an application the subscriber was already told about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSummary {
    pub id: i64,
    /// Display name of the commenter.
    pub name: String,
    pub text: String,
    /// The application the comment was posted on.
    pub application: ApplicationSummary,
}

impl CommentSummary {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        text: impl Into<String>,
        application: ApplicationSummary,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            text: text.into(),
            application,
        }
    }
}
