use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::utils::format::{PLACEHOLDER, format_dollars};

const CARRIER_FALLBACK: &str = "N/A";

/// One completed call, as returned by `GET /all_call_extractions`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallLogRecord {
    #[serde(rename = "Run_ID")]
    pub run_id: String,

    /// `None` when the backend sent no usable timestamp; the row still renders.
    #[serde(default, deserialize_with = "deserialize_call_time")]
    pub date_time: Option<DateTime<Utc>>,

    #[serde(rename = "Carrier_Legal_Name", default)]
    pub carrier_legal_name: Option<String>,

    #[serde(default)]
    pub mc_number: Option<String>,

    #[serde(rename = "Origin", default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default)]
    pub equipment_type: Option<String>,

    #[serde(default)]
    pub turns: Option<u32>,

    #[serde(default)]
    pub flag_closed_deal: bool,

    #[serde(default)]
    pub was_transferred: bool,

    #[serde(default)]
    pub final_rate: Option<f64>,

    #[serde(default)]
    pub original_rate: Option<f64>,

    #[serde(default)]
    pub carrier_sentiment: Option<String>,
}

/// Outcome badge for a call row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Closed,
    Failed,
}

impl CallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CallStatus::Closed => "Closed",
            CallStatus::Failed => "Failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CallStatus::Closed => "status-badge status-closed",
            CallStatus::Failed => "status-badge status-failed",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCallTime {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Backend timestamps are RFC 3339 or naive UTC (`2024-02-10T14:03:22.123456`).
/// Null, non-string or unparseable values decode as `None` instead of failing the row.
fn deserialize_call_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<RawCallTime>::deserialize(deserializer)? {
        Some(RawCallTime::Text(s)) => parse_call_time(&s),
        Some(RawCallTime::Other(_)) | None => None,
    })
}

fn parse_call_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl CallLogRecord {
    /// Amount shown in the "Final Rate" column.
    ///
    /// A `final_rate` of exactly zero counts as absent and falls back to the
    /// original rate.
    pub fn display_amount(&self) -> Option<f64> {
        self.final_rate
            .filter(|rate| *rate != 0.0)
            .or(self.original_rate)
    }

    pub fn amount_label(&self) -> String {
        self.display_amount()
            .map_or_else(|| PLACEHOLDER.to_string(), format_dollars)
    }

    pub fn status(&self) -> CallStatus {
        if self.flag_closed_deal {
            CallStatus::Closed
        } else {
            CallStatus::Failed
        }
    }

    pub fn carrier_label(&self) -> &str {
        self.carrier_legal_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(CARRIER_FALLBACK)
    }

    pub fn route_label(&self) -> String {
        format!(
            "{} → {}",
            self.origin.as_deref().unwrap_or(PLACEHOLDER),
            self.destination.as_deref().unwrap_or(PLACEHOLDER)
        )
    }

    pub fn turns_label(&self) -> String {
        match self.turns {
            Some(1) => "1 turn".to_string(),
            Some(turns) => format!("{turns} turns"),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Call date in the browser's time zone.
    pub fn local_date_label(&self) -> String {
        self.date_label_in(&Local)
    }

    /// Call date as `M/D/YYYY` in the given time zone.
    pub fn date_label_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date_time.map_or_else(
            || PLACEHOLDER.to_string(),
            |dt| dt.with_timezone(tz).format("%-m/%-d/%Y").to_string(),
        )
    }

    /// Capitalized carrier sentiment, e.g. `Positive`.
    pub fn sentiment_label(&self) -> Option<String> {
        let sentiment = self.carrier_sentiment.as_deref()?.trim();
        let mut chars = sentiment.chars();
        let first = chars.next()?;
        Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
    }
}
