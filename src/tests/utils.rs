// src/tests/utils.rs
use crate::config::DigestConfig;
use crate::digest::DigestComposer;
use crate::domain::{Alert, ApplicationSummary, CommentSummary};

pub const BASE_URL: &str = "http://dev.planningalerts.org.au";

/// Composer pointed at the dev site, with the production sender.
pub fn composer() -> DigestComposer {
    DigestComposer::new(&DigestConfig {
        base_url: BASE_URL.to_string(),
        ..DigestConfig::default()
    })
    .unwrap_or_else(|e| panic!("composer config rejected: {e}"))
}

pub fn alert() -> Alert {
    Alert {
        id: 1,
        email: "matthew@openaustralia.org".to_string(),
        address: "24 Bruce Rd, Glenbrook NSW 2773".to_string(),
        lat: 1.0,
        lng: 2.0,
        radius_meters: 800,
        confirm_id: "abcdef".to_string(),
        last_sent: None,
    }
}

pub fn a1() -> ApplicationSummary {
    ApplicationSummary::new(1, "Foo Street, Bar")
        .with_council_reference("a1")
        .with_description("Knock something down")
}

pub fn a2() -> ApplicationSummary {
    ApplicationSummary::new(2, "Bar Street, Foo")
        .with_council_reference("a2")
        .with_description("Put something up")
}

/// No reference, no description.
pub fn a3() -> ApplicationSummary {
    ApplicationSummary::new(3, "2 Foo Parade, Glenbrook NSW 2773")
}

pub fn c1() -> CommentSummary {
    CommentSummary::new(1, "Matthew Landauer", "I think this is a great idea", a3())
}

pub fn c2() -> CommentSummary {
    CommentSummary::new(2, "Jane Citizen", "Too much traffic already", a1())
}
