// src/digest/text.rs

use super::facts::DigestFacts;

/// Plain-text body. Line oriented, no markup; the layout is pinned by the
/// regression files under `src/tests/regression`.
pub fn render_text(facts: &DigestFacts) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !facts.applications.is_empty() {
        lines.push(format!(
            "New planning applications within {} of {}",
            facts.radius, facts.alert_address
        ));
        lines.push(String::new());

        for app in &facts.applications {
            lines.push(app.address.clone());
            if let Some(reference) = &app.council_reference {
                lines.push(format!("Reference: {reference}"));
            }
            if let Some(description) = &app.description {
                lines.push(description.clone());
            }
            lines.push(format!("Read more: {}", app.link));
            lines.push(String::new());
        }
    }

    if !facts.comments.is_empty() {
        lines.push(format!(
            "New comments on planning applications near {}",
            facts.alert_address
        ));
        lines.push(String::new());

        for comment in &facts.comments {
            lines.push(format!(
                "{} commented on {}:",
                comment.name, comment.application_address
            ));
            lines.push(comment.text.clone());
            if let Some(link) = &comment.link {
                lines.push(format!("Read more: {link}"));
            }
            lines.push(String::new());
        }
    }

    lines.push("--".to_string());
    lines.push(format!(
        "You are receiving this email because you created a planning alert for {}.",
        facts.alert_address
    ));
    lines.push(format!(
        "To stop receiving these emails: {}",
        facts.unsubscribe_link
    ));

    let mut body = lines.join("\n");
    body.push('\n');
    body
}
