use crate::models::analytics::AnalyticsSummary;
use yew::prelude::*;

use super::metric_card::MetricCard;

#[derive(Properties, PartialEq)]
pub struct KpiGridProps {
    pub summary: AnalyticsSummary,
}

#[function_component(KpiGrid)]
pub fn kpi_grid(props: &KpiGridProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="kpi-grid">
            <MetricCard
                title="Success Rate"
                value={summary.success_rate_label().map(AttrValue::from)}
                label="Calls ending in a closed deal"
            />
            <MetricCard
                title="Rate Efficiency"
                value={summary.rate_efficiency_label().map(AttrValue::from)}
                label="Final rate vs. loadboard rate"
            />
            <MetricCard
                title="Avg Negotiation Turns"
                value={summary.avg_turns_label().map(AttrValue::from)}
                label="Turns per call"
            />
            <MetricCard
                title="Total Calls"
                value={summary.total_calls_label().map(AttrValue::from)}
                label="Calls"
            />
        </div>
    }
}
