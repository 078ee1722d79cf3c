use std::rc::Rc;
use yew::prelude::*;

use super::{
    call_table::CallTable, evolution_chart::EvolutionChart, kpi_grid::KpiGrid,
    origin_chart::OriginChart, sentiment_chart::SentimentChart,
};
use crate::models::dashboard::DashboardData;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub data: Rc<DashboardData>,
    pub dark_mode: bool,
}

/// Dashboard body for a loaded model.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let evolution = use_memo(props.data.clone(), |data| data.evolution_series());
    let origins = use_memo(props.data.clone(), |data| data.origin_series());
    let sentiment = use_memo(props.data.clone(), |data| data.sentiment_series());
    let logs = use_memo(props.data.clone(), |data| data.raw_logs.clone());

    html! {
        <>
            <section class="kpi-section">
                <KpiGrid summary={props.data.summary.clone()} />
            </section>

            <section class="chart-section">
                <EvolutionChart points={evolution} dark_mode={props.dark_mode} />
            </section>

            <section class="chart-row">
                <div class="chart-cell">
                    <OriginChart origins={origins} dark_mode={props.dark_mode} />
                </div>
                <div class="chart-cell">
                    <SentimentChart slices={sentiment} dark_mode={props.dark_mode} />
                </div>
            </section>

            <section class="table-section">
                <CallTable {logs} />
            </section>
        </>
    }
}
