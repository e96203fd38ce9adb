use crate::digest::facts::ApplicationFact;
use maud::{html, Markup};

pub fn application_block(app: &ApplicationFact) -> Markup {
    html! {
        div class="application" {
            p class="address" {
                a href=(app.link) { (app.address) }
            }
            @if let Some(reference) = &app.council_reference {
                p class="reference" { "Reference: " (reference) }
            }
            @if let Some(description) = &app.description {
                p class="description" { (description) }
            }
        }
    }
}
