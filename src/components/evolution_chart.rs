use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line},
};
use std::rc::Rc;
use yew::prelude::*;

use super::chart::{ChartEmpty, ChartPalette, mount_chart};
use crate::models::analytics::EvolutionPoint;

const CHART_ID: &str = "evolution-chart";
const RATE_SERIES: &str = "Success rate";
const LOADS_SERIES: &str = "Total loads";

#[derive(Properties, PartialEq)]
pub struct EvolutionChartProps {
    pub points: Rc<Vec<EvolutionPoint>>,
    pub dark_mode: bool,
}

/// Daily success rate (line, right axis) over daily call volume (bars).
#[function_component(EvolutionChart)]
pub fn evolution_chart(props: &EvolutionChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.points.clone(), container_ref, props.dark_mode),
            |(points, container_ref, dark_mode)| {
                let points = points.clone();
                let dark_mode = *dark_mode;
                let listener = if points.is_empty() {
                    None
                } else {
                    mount_chart(container_ref, CHART_ID, move || build_chart(&points, dark_mode))
                };

                move || drop(listener)
            },
        );
    }

    if props.points.is_empty() {
        return html! { <ChartEmpty message="No daily activity recorded yet" /> };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

pub fn build_chart(points: &[EvolutionPoint], dark_mode: bool) -> CharmingChart {
    let palette = ChartPalette::for_mode(dark_mode);

    let dates: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
    let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let loads: Vec<f64> = points.iter().map(|p| p.total_loads as f64).collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Negotiation Evolution")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)),
        )
        .legend(
            Legend::new()
                .data(vec![LOADS_SERIES, RATE_SERIES])
                .bottom(0)
                .text_style(TextStyle::new().color(palette.axis)),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("6%")
                .bottom("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(dates)
                .axis_label(AxisLabel::new().color(palette.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Loads")
                .axis_label(AxisLabel::new().color(palette.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(palette.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Success")
                .min(0)
                .max(100)
                .axis_label(AxisLabel::new().color(palette.axis).formatter("{value}%")),
        )
        .series(
            Bar::new()
                .name(LOADS_SERIES)
                .data(loads)
                .bar_width("50%")
                .item_style(ItemStyle::new().color(palette.secondary)),
        )
        .series(
            Line::new()
                .name(RATE_SERIES)
                .y_axis_index(1)
                .data(rates)
                .smooth(true)
                .item_style(ItemStyle::new().color(palette.primary))
                .line_style(LineStyle::new().color(palette.primary).width(2)),
        )
}
