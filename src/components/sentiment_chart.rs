use charming::{
    Chart as CharmingChart,
    component::{Legend, Title},
    element::{TextStyle, Tooltip, Trigger},
    series::Pie,
};
use std::rc::Rc;
use yew::prelude::*;

use super::chart::{ChartEmpty, ChartPalette, mount_chart};
use crate::models::analytics::SentimentSlice;

const CHART_ID: &str = "sentiment-chart";

#[derive(Properties, PartialEq)]
pub struct SentimentChartProps {
    pub slices: Rc<Vec<SentimentSlice>>,
    pub dark_mode: bool,
}

/// Carrier sentiment share. Proportions are left to the pie series.
#[function_component(SentimentChart)]
pub fn sentiment_chart(props: &SentimentChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.slices.clone(), container_ref, props.dark_mode),
            |(slices, container_ref, dark_mode)| {
                let slices = slices.clone();
                let dark_mode = *dark_mode;
                let listener = if slices.is_empty() {
                    None
                } else {
                    mount_chart(container_ref, CHART_ID, move || build_chart(&slices, dark_mode))
                };

                move || drop(listener)
            },
        );
    }

    if props.slices.is_empty() {
        return html! { <ChartEmpty message="No sentiment data yet" /> };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

pub fn build_chart(slices: &[SentimentSlice], dark_mode: bool) -> CharmingChart {
    let palette = ChartPalette::for_mode(dark_mode);

    let data: Vec<(f64, &str)> = slices
        .iter()
        .map(|s| (s.value as f64, s.name.as_str()))
        .collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Carrier Sentiment")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter("{b}: {c} ({d}%)"),
        )
        .legend(
            Legend::new()
                .bottom(0)
                .text_style(TextStyle::new().color(palette.axis)),
        )
        .color(palette.series.to_vec())
        .series(
            Pie::new()
                .name("Sentiment")
                .radius(vec!["40%", "68%"])
                .data(data),
        )
}
