use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Label, LabelPosition,
        LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::Bar,
};
use std::rc::Rc;
use yew::prelude::*;

use super::chart::{ChartEmpty, ChartPalette, mount_chart};
use crate::models::analytics::OriginRate;

const CHART_ID: &str = "origin-chart";

#[derive(Properties, PartialEq)]
pub struct OriginChartProps {
    pub origins: Rc<Vec<OriginRate>>,
    pub dark_mode: bool,
}

#[function_component(OriginChart)]
pub fn origin_chart(props: &OriginChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.origins.clone(), container_ref, props.dark_mode),
            |(origins, container_ref, dark_mode)| {
                let origins = origins.clone();
                let dark_mode = *dark_mode;
                let listener = if origins.is_empty() {
                    None
                } else {
                    mount_chart(container_ref, CHART_ID, move || build_chart(&origins, dark_mode))
                };

                move || drop(listener)
            },
        );
    }

    if props.origins.is_empty() {
        return html! { <ChartEmpty message="No origins to compare yet" /> };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

pub fn build_chart(origins: &[OriginRate], dark_mode: bool) -> CharmingChart {
    let palette = ChartPalette::for_mode(dark_mode);

    let names: Vec<String> = origins.iter().map(|o| o.name.clone()).collect();
    let percents: Vec<f64> = origins.iter().map(|o| o.percent).collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Success Rate by Origin")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(palette.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(names)
                .axis_label(AxisLabel::new().rotate(30).color(palette.axis).interval(0)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(0)
                .max(100)
                .axis_label(AxisLabel::new().color(palette.axis).formatter("{value}%"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(palette.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .name("Success rate")
                .data(percents)
                .bar_width("60%")
                .item_style(ItemStyle::new().color(palette.primary))
                .label(
                    Label::new()
                        .show(true)
                        .position(LabelPosition::Top)
                        .formatter("{c}%"),
                ),
        )
}
