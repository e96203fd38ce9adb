// templates/pages/digest.rs

use crate::digest::facts::DigestFacts;
use crate::templates::{
    components::{application_block, comment_block},
    email_layout,
};
use maud::{html, Markup};

pub fn digest_page(facts: &DigestFacts) -> Markup {
    email_layout(
        &facts.subject,
        html! {
            @if !facts.applications.is_empty() {
                h2 { "New planning applications within " (facts.radius) " of " (facts.alert_address) }
                @for app in &facts.applications {
                    (application_block(app))
                }
            }

            @if !facts.comments.is_empty() {
                h2 { "New comments on planning applications near " (facts.alert_address) }
                @for comment in &facts.comments {
                    (comment_block(comment))
                }
            }

            hr;
            p class="footer" {
                "You are receiving this email because you created a planning alert for "
                (facts.alert_address)
                ". "
                a href=(facts.unsubscribe_link) { "Unsubscribe" }
            }
        },
    )
}
