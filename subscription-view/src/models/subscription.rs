//! Subscription model.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Snapshot of a customer's attachment to a plan.
///
/// Dates accept either `YYYY-MM-DD` or an RFC 3339 timestamp; a timestamp
/// keeps the calendar date in its own offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscription_uid: String,
    pub billing_plan_name: String,
    #[serde(deserialize_with = "date_or_datetime")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "date_or_datetime")]
    pub end_date: NaiveDate,
    pub auto_renew: bool,
}

impl Subscription {
    /// Renewal flag as shown in the summary card.
    pub fn renews_label(&self) -> &'static str {
        if self.auto_renew {
            "yes"
        } else {
            "no"
        }
    }
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", raw, e)))
}
