// src/mailer.rs

use crate::domain::ComposedMessage;
use crate::errors::{DigestError, DigestResult};
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::info;

const BREVO_SMTP_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Hands a composed digest to whatever actually sends mail.
/// Implementations report failure; they do not retry.
pub trait Transport: Send + Sync {
    fn deliver(&self, message: &ComposedMessage) -> DigestResult<()>;
}

pub struct BrevoMailer {
    api_key: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    text_content: &'a str,
    html_content: &'a str,
}

impl<'a> From<&'a ComposedMessage> for BrevoPayload<'a> {
    fn from(message: &'a ComposedMessage) -> Self {
        Self {
            sender: BrevoSender {
                name: message.from_name(),
                email: message.from(),
            },
            to: vec![BrevoRecipient { email: message.to() }],
            subject: message.subject(),
            text_content: message.text_body(),
            html_content: message.html_body(),
        }
    }
}

impl BrevoMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }
}

impl Transport for BrevoMailer {
    fn deliver(&self, message: &ComposedMessage) -> DigestResult<()> {
        let payload = BrevoPayload::from(message);

        let resp = self
            .client
            .post(BREVO_SMTP_URL)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| DigestError::Delivery(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(DigestError::Delivery(format!(
                "Brevo API error: {status} - {text}"
            )));
        }

        info!(to = message.to(), subject = message.subject(), "digest handed to Brevo");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DigestConfig;
    use crate::digest::DigestComposer;
    use crate::domain::{Alert, ApplicationSummary};

    #[test]
    fn payload_carries_both_bodies() {
        let composer = DigestComposer::new(&DigestConfig::default()).unwrap();
        let alert = Alert {
            id: 1,
            email: "someone@example.com".to_string(),
            address: "1 Main St".to_string(),
            lat: 0.0,
            lng: 0.0,
            radius_meters: 500,
            confirm_id: "tok".to_string(),
            last_sent: None,
        };
        let msg = composer
            .compose(&alert, &[ApplicationSummary::new(4, "Foo Street")], &[])
            .unwrap();

        let json = serde_json::to_value(BrevoPayload::from(&msg)).unwrap();

        assert_eq!(json["sender"]["email"], "contact@planningalerts.org.au");
        assert_eq!(json["sender"]["name"], "PlanningAlerts.org.au");
        assert_eq!(json["to"][0]["email"], "someone@example.com");
        assert_eq!(json["subject"], "1 new planning application near 1 Main St");
        assert_eq!(json["textContent"], msg.text_body());
        assert_eq!(json["htmlContent"], msg.html_body());
    }
}
