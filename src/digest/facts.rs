// src/digest/facts.rs

use crate::domain::{Alert, ApplicationSummary, CommentSummary, TrackedLink};
use crate::errors::{DigestError, DigestResult};
use crate::links::LinkBuilder;

/// An application resolved into the strings both bodies print.
#[derive(Debug, Clone)]
pub struct ApplicationFact {
    pub id: i64,
    pub address: String,
    pub council_reference: Option<String>,
    pub description: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct CommentFact {
    pub name: String,
    pub text: String,
    pub application_id: Option<i64>,
    pub application_address: String,
    /// Absent when the commented application has no identifier.
    pub link: Option<String>,
}

/// Everything a digest says, resolved once. The text and HTML renderers
/// only ever read from here, so they cannot drift apart.
#[derive(Debug, Clone)]
pub struct DigestFacts {
    pub subject: String,
    pub alert_address: String,
    pub radius: String,
    pub unsubscribe_link: String,
    pub applications: Vec<ApplicationFact>,
    pub comments: Vec<CommentFact>,
}

impl DigestFacts {
    pub fn resolve(
        links: &LinkBuilder,
        alert: &Alert,
        applications: &[ApplicationSummary],
        comments: &[CommentSummary],
    ) -> DigestResult<Self> {
        if applications.is_empty() && comments.is_empty() {
            return Err(DigestError::InvalidInput(format!(
                "nothing new for alert {}",
                alert.id
            )));
        }

        let applications = applications
            .iter()
            .map(|a| resolve_application(links, a))
            .collect::<DigestResult<Vec<_>>>()?;

        let comments = comments
            .iter()
            .map(|c| resolve_comment(links, c))
            .collect::<DigestResult<Vec<_>>>()?;

        Ok(Self {
            subject: super::subject_line(&alert.address, comments.len(), applications.len()),
            alert_address: alert.address.clone(),
            radius: alert.radius_in_words(),
            unsubscribe_link: links.unsubscribe_link(&alert.confirm_id),
            applications,
            comments,
        })
    }

    /// Links in the order they appear in the HTML body.
    pub fn tracked_links(&self) -> Vec<TrackedLink> {
        let from_applications = self.applications.iter().map(|a| TrackedLink {
            application_id: a.id,
            url: a.link.clone(),
        });

        let from_comments = self.comments.iter().filter_map(|c| {
            Some(TrackedLink {
                application_id: c.application_id?,
                url: c.link.clone()?,
            })
        });

        from_applications.chain(from_comments).collect()
    }
}

/// Required fields are checked for content but rendered exactly as given,
/// so link text always equals the record's address.
fn required_address(application: &ApplicationSummary) -> DigestResult<String> {
    if application.address.trim().is_empty() {
        return Err(DigestError::InvalidInput(format!(
            "application {:?} has no address",
            application.id
        )));
    }
    Ok(application.address.clone())
}

fn required_comment_field(
    comment: &CommentSummary,
    field: &str,
    value: &str,
) -> DigestResult<String> {
    if value.trim().is_empty() {
        return Err(DigestError::InvalidInput(format!(
            "comment {} has no {field}",
            comment.id
        )));
    }
    Ok(value.to_string())
}

/// Blank optional fields are treated as missing; others are kept verbatim.
fn present(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

fn resolve_application(
    links: &LinkBuilder,
    application: &ApplicationSummary,
) -> DigestResult<ApplicationFact> {
    let address = required_address(application)?;
    let Some(id) = application.id else {
        return Err(DigestError::InvalidInput(format!(
            "application at {address:?} has no identifier to link to"
        )));
    };

    Ok(ApplicationFact {
        id,
        link: links.application_link(id),
        address,
        council_reference: present(&application.council_reference),
        description: present(&application.description),
    })
}

fn resolve_comment(links: &LinkBuilder, comment: &CommentSummary) -> DigestResult<CommentFact> {
    let application_address = required_address(&comment.application).map_err(|_| {
        DigestError::InvalidInput(format!(
            "comment {} is on an application with no address",
            comment.id
        ))
    })?;

    Ok(CommentFact {
        name: required_comment_field(comment, "name", &comment.name)?,
        text: required_comment_field(comment, "text", &comment.text)?,
        application_id: comment.application.id,
        application_address,
        link: comment.application.id.map(|id| links.application_link(id)),
    })
}
