// src/config.rs
use std::env;

const ENV_BASE_URL: &str = "PLANNING_ALERTS_BASE_URL";
const ENV_SENDER_EMAIL: &str = "PLANNING_ALERTS_SENDER_EMAIL";
const ENV_SENDER_NAME: &str = "PLANNING_ALERTS_SENDER_NAME";
const ENV_DATABASE: &str = "PLANNING_ALERTS_DATABASE";
const ENV_BREVO_API_KEY: &str = "BREVO_API_KEY";

#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Public site root that application and unsubscribe links hang off.
    /// Example: "https://www.planningalerts.org.au"
    pub base_url: String,
    pub sender_email: String,
    pub sender_name: String,
    pub database_path: String,
    /// Without a key the binary only previews digests.
    pub brevo_api_key: Option<String>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.planningalerts.org.au".to_string(),
            sender_email: "contact@planningalerts.org.au".to_string(),
            sender_name: "PlanningAlerts.org.au".to_string(),
            database_path: "planning_alerts.sqlite3".to_string(),
            brevo_api_key: None,
        }
    }
}

impl DigestConfig {
    /// Defaults overridden by whichever environment variables are set.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env_or(ENV_BASE_URL, defaults.base_url),
            sender_email: env_or(ENV_SENDER_EMAIL, defaults.sender_email),
            sender_name: env_or(ENV_SENDER_NAME, defaults.sender_name),
            database_path: env_or(ENV_DATABASE, defaults.database_path),
            brevo_api_key: env::var(ENV_BREVO_API_KEY)
                .ok()
                .filter(|k| !k.trim().is_empty()),
        }
    }
}

fn env_or(key: &str, fallback: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}
