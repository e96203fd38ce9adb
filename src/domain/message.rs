// src/domain/message.rs

use serde::Serialize;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// One application link as it appears in the HTML body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedLink {
    pub application_id: i64,
    pub url: String,
}

/// A body representation handed to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPart<'a> {
    pub content_type: &'static str,
    pub body: &'a str,
}

/// A finished digest. Built once by the composer, never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedMessage {
    to: String,
    from: String,
    from_name: String,
    subject: String,
    text_body: String,
    html_body: String,
    links: Vec<TrackedLink>,
}

impl ComposedMessage {
    pub(crate) fn new(
        to: String,
        from: String,
        from_name: String,
        subject: String,
        text_body: String,
        html_body: String,
        links: Vec<TrackedLink>,
    ) -> Self {
        Self {
            to,
            from,
            from_name,
            subject,
            text_body,
            html_body,
            links,
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn text_body(&self) -> &str {
        &self.text_body
    }

    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    pub fn links(&self) -> &[TrackedLink] {
        &self.links
    }

    /// Always plain text first, HTML second.
    pub fn parts(&self) -> [ContentPart<'_>; 2] {
        [
            ContentPart {
                content_type: TEXT_PLAIN,
                body: &self.text_body,
            },
            ContentPart {
                content_type: TEXT_HTML,
                body: &self.html_body,
            },
        ]
    }

    /// Body of the first part whose content type contains `needle`.
    pub fn part(&self, needle: &str) -> Option<&str> {
        self.parts()
            .into_iter()
            .find(|p| p.content_type.contains(needle))
            .map(|p| p.body)
    }
}
