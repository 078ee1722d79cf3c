use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::utils::format::{format_percent, format_value, round_one_decimal};

/// Headline KPIs computed by the backend.
///
/// Every field is optional so a partially populated summary still renders,
/// with the missing cards showing a placeholder.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub rate_efficiency_ratio: Option<f64>,
    #[serde(default)]
    pub avg_negotiation_turns: Option<f64>,
    #[serde(default)]
    pub total_calls: Option<u64>,
}

impl AnalyticsSummary {
    pub fn success_rate_label(&self) -> Option<String> {
        self.success_rate.map(format_percent)
    }

    pub fn rate_efficiency_label(&self) -> Option<String> {
        self.rate_efficiency_ratio.map(format_percent)
    }

    pub fn avg_turns_label(&self) -> Option<String> {
        self.avg_negotiation_turns.map(format_value)
    }

    pub fn total_calls_label(&self) -> Option<String> {
        self.total_calls.map(|calls| calls.to_string())
    }
}

/// Closed deals out of all calls for one bucket (a day or an origin).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DealCount {
    pub closed: u64,
    pub total: u64,
}

impl DealCount {
    /// Closed share as a percentage rounded to one decimal.
    ///
    /// A zero total yields `0.0` rather than NaN.
    pub fn success_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = round_one_decimal(self.closed as f64 / self.total as f64 * 100.0);
        if rate.is_finite() { rate } else { 0.0 }
    }
}

/// Body of `GET /call_analytics`.
///
/// Object sections decode into insertion-ordered maps so that the order of
/// keys in the response is the tie-break order for every derived series.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CallAnalytics {
    #[serde(default)]
    pub summary: Option<AnalyticsSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evolution: IndexMap<String, DealCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin_success: IndexMap<String, DealCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_distribution: IndexMap<String, u64>,
}

/// Treats an explicit `null` section the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One day on the evolution chart.
#[derive(Clone, Debug, PartialEq)]
pub struct EvolutionPoint {
    pub date: String,
    pub rate: f64,
    pub total_loads: u64,
    /// Epoch milliseconds, used for ordering only. `None` when the date
    /// could not be parsed.
    pub timestamp: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OriginRate {
    pub name: String,
    /// One-decimal percentage string, e.g. `"66.7"`.
    pub rate: String,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SentimentSlice {
    pub name: String,
    pub value: u64,
}

/// Builds the evolution series sorted by date.
///
/// Undated points go last; equal timestamps keep their input order.
pub fn evolution_series(evolution: &IndexMap<String, DealCount>) -> Vec<EvolutionPoint> {
    let mut points: Vec<EvolutionPoint> = evolution
        .iter()
        .map(|(date, counts)| EvolutionPoint {
            date: date.clone(),
            rate: counts.success_percentage(),
            total_loads: counts.total,
            timestamp: parse_date_millis(date),
        })
        .collect();

    // `sort_by` is stable
    points.sort_by(|a, b| match (a.timestamp, b.timestamp) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    points
}

pub fn origin_series(origin_success: &IndexMap<String, DealCount>) -> Vec<OriginRate> {
    origin_success
        .iter()
        .map(|(name, counts)| {
            let percent = counts.success_percentage();
            OriginRate {
                name: name.clone(),
                rate: format!("{percent:.1}"),
                percent,
            }
        })
        .collect()
}

pub fn sentiment_series(distribution: &IndexMap<String, u64>) -> Vec<SentimentSlice> {
    distribution
        .iter()
        .map(|(name, &value)| SentimentSlice {
            name: name.clone(),
            value,
        })
        .collect()
}

/// Parses `YYYY-MM-DD` (as UTC midnight) or an RFC 3339 timestamp.
fn parse_date_millis(date: &str) -> Option<i64> {
    let date = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(day.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }

    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(closed: u64, total: u64) -> DealCount {
        DealCount { closed, total }
    }

    #[test]
    fn test_success_percentage_rounds_to_one_decimal() {
        assert_eq!(counts(2, 3).success_percentage(), 66.7);
        assert_eq!(counts(1, 3).success_percentage(), 33.3);
        assert_eq!(counts(3, 3).success_percentage(), 100.0);
    }

    #[test]
    fn test_success_percentage_zero_total() {
        let rate = counts(0, 0).success_percentage();
        assert_eq!(rate, 0.0);
        assert!(rate.is_finite());
    }

    #[test]
    fn test_parse_date_millis() {
        assert_eq!(parse_date_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(
            parse_date_millis("1970-01-01T00:00:01Z"),
            Some(1_000)
        );
        assert_eq!(parse_date_millis("last tuesday"), None);
    }

    #[test]
    fn test_undated_points_sort_last_in_input_order() {
        let mut evolution = IndexMap::new();
        evolution.insert("unknown-b".to_string(), counts(1, 2));
        evolution.insert("2024-02-10".to_string(), counts(1, 1));
        evolution.insert("unknown-a".to_string(), counts(0, 2));

        let dates: Vec<String> = evolution_series(&evolution)
            .into_iter()
            .map(|p| p.date)
            .collect();

        assert_eq!(dates, vec!["2024-02-10", "unknown-b", "unknown-a"]);
    }

    #[test]
    fn test_origin_series_keeps_input_order() {
        let mut origins = IndexMap::new();
        origins.insert("Dallas, TX".to_string(), counts(2, 3));
        origins.insert("Atlanta, GA".to_string(), counts(0, 0));

        let series = origin_series(&origins);

        assert_eq!(series[0].name, "Dallas, TX");
        assert_eq!(series[0].rate, "66.7");
        assert_eq!(series[1].rate, "0.0");
        assert_eq!(series[1].percent, 0.0);
    }

    #[test]
    fn test_summary_labels() {
        let summary = AnalyticsSummary {
            success_rate: Some(62.5),
            rate_efficiency_ratio: None,
            avg_negotiation_turns: Some(2.26),
            total_calls: Some(32),
        };

        assert_eq!(summary.success_rate_label().as_deref(), Some("62.5%"));
        assert_eq!(summary.rate_efficiency_label(), None);
        assert_eq!(summary.avg_turns_label().as_deref(), Some("2.3"));
        assert_eq!(summary.total_calls_label().as_deref(), Some("32"));
    }
}
