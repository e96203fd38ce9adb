// src/domain/alert.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscriber's saved watch area. Only `last_sent` ever changes after
/// registration, and only through `stats::record_delivery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    /// Contact address the digest goes to.
    pub email: String,
    /// Free-text location, shown in subject lines.
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub radius_meters: u32,
    /// Token used in the unsubscribe link.
    pub confirm_id: String,
    #[serde(default)]
    pub last_sent: Option<DateTime<Utc>>,
}

impl Alert {
    /// Search radius in words, e.g. "800 m" or "1.5 km".
    pub fn radius_in_words(&self) -> String {
        meters_in_words(self.radius_meters)
    }
}

pub fn meters_in_words(meters: u32) -> String {
    if meters < 1000 {
        format!("{meters} m")
    } else if meters % 1000 == 0 {
        format!("{} km", meters / 1000)
    } else {
        format!("{:.1} km", f64::from(meters) / 1000.0)
    }
}
