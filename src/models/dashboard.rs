use std::collections::HashSet;

use indexmap::IndexMap;

use super::{
    analytics::{
        AnalyticsSummary, CallAnalytics, DealCount, EvolutionPoint, OriginRate, SentimentSlice,
        evolution_series, origin_series, sentiment_series,
    },
    call_log::CallLogRecord,
    error::AppError,
};

/// Analytics bundle and call logs merged into the model the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub summary: AnalyticsSummary,
    pub evolution: IndexMap<String, DealCount>,
    pub origin_success: IndexMap<String, DealCount>,
    pub sentiment_distribution: IndexMap<String, u64>,
    pub raw_logs: Vec<CallLogRecord>,
    /// Rows dropped because their `Run_ID` was already present.
    pub duplicate_rows: usize,
}

impl DashboardData {
    /// Merges both responses. Fails when the analytics bundle carries no
    /// summary, since no KPI can be shown without it.
    pub fn merge(analytics: CallAnalytics, logs: Vec<CallLogRecord>) -> Result<Self, AppError> {
        let CallAnalytics {
            summary,
            evolution,
            origin_success,
            sentiment_distribution,
        } = analytics;

        let summary = summary.ok_or(AppError::MissingSummary)?;

        let total = logs.len();
        let mut seen = HashSet::with_capacity(total);
        let raw_logs: Vec<CallLogRecord> = logs
            .into_iter()
            .filter(|record| seen.insert(record.run_id.clone()))
            .collect();

        Ok(Self {
            summary,
            evolution,
            origin_success,
            sentiment_distribution,
            duplicate_rows: total - raw_logs.len(),
            raw_logs,
        })
    }

    pub fn evolution_series(&self) -> Vec<EvolutionPoint> {
        evolution_series(&self.evolution)
    }

    pub fn origin_series(&self) -> Vec<OriginRate> {
        origin_series(&self.origin_success)
    }

    pub fn sentiment_series(&self) -> Vec<SentimentSlice> {
        sentiment_series(&self.sentiment_distribution)
    }
}
