// src/digest/composer.rs

use super::facts::DigestFacts;
use super::text::render_text;
use crate::config::DigestConfig;
use crate::domain::{Alert, ApplicationSummary, CommentSummary, ComposedMessage};
use crate::errors::{DigestError, DigestResult};
use crate::links::LinkBuilder;
use crate::templates::{digest_page, escaped};
use tracing::debug;

/// Turns an alert plus whatever is new for it into one outbound message.
///
/// Composition is pure: no clock, no randomness, no I/O. Calling
/// [`DigestComposer::compose`] twice with the same input gives the same
/// message, byte for byte.
#[derive(Debug, Clone)]
pub struct DigestComposer {
    links: LinkBuilder,
    sender_email: String,
    sender_name: String,
}

impl DigestComposer {
    pub fn new(cfg: &DigestConfig) -> DigestResult<Self> {
        Ok(Self {
            links: LinkBuilder::new(&cfg.base_url)?,
            sender_email: cfg.sender_email.clone(),
            sender_name: cfg.sender_name.clone(),
        })
    }

    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    pub fn compose(
        &self,
        alert: &Alert,
        applications: &[ApplicationSummary],
        comments: &[CommentSummary],
    ) -> DigestResult<ComposedMessage> {
        let facts = DigestFacts::resolve(&self.links, alert, applications, comments)?;

        let text_body = render_text(&facts);
        let html_body = digest_page(&facts).into_string();
        check_consistency(&facts, &text_body, &html_body)?;

        debug!(
            alert_id = alert.id,
            applications = facts.applications.len(),
            comments = facts.comments.len(),
            "composed digest"
        );

        Ok(ComposedMessage::new(
            alert.email.clone(),
            self.sender_email.clone(),
            self.sender_name.clone(),
            facts.subject.clone(),
            text_body,
            html_body,
            facts.tracked_links(),
        ))
    }
}

/// Both bodies must mention every address and description, and the HTML must
/// hold exactly one block per application and per comment.
fn check_consistency(facts: &DigestFacts, text: &str, html: &str) -> DigestResult<()> {
    let expect = |body: &str, kind: &str, needle: &str| {
        if body.contains(needle) {
            Ok(())
        } else {
            Err(DigestError::RenderingInconsistency(format!(
                "{kind} body is missing {needle:?}"
            )))
        }
    };

    for app in &facts.applications {
        expect(text, "text", &app.address)?;
        expect(html, "html", &escaped(&app.address))?;
        expect(html, "html", &escaped(&app.link))?;
        if let Some(description) = &app.description {
            expect(text, "text", description)?;
            expect(html, "html", &escaped(description))?;
        }
    }

    for comment in &facts.comments {
        expect(text, "text", &comment.application_address)?;
        expect(html, "html", &escaped(&comment.application_address))?;
        expect(text, "text", &comment.text)?;
        expect(html, "html", &escaped(&comment.text))?;
    }

    let blocks = [
        ("application", facts.applications.len()),
        ("comment", facts.comments.len()),
    ];
    for (class, want) in blocks {
        let found = html.matches(&format!("<div class=\"{class}\">")).count();
        if found != want {
            return Err(DigestError::RenderingInconsistency(format!(
                "html body has {found} {class} blocks, expected {want}"
            )));
        }
    }

    Ok(())
}
