use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;

/// Theme-aware colors shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub title: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub series: [&'static str; 6],
}

impl ChartPalette {
    pub const fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                title: "#e4e4e7",
                axis: "#a1a1aa",
                grid: "#404040",
                primary: "#34d399",
                secondary: "#7ba3ff",
                series: ["#34d399", "#7ba3ff", "#fbbf24", "#fb7185", "#9b7ef5", "#22d3ee"],
            }
        } else {
            Self {
                title: "#1f2937",
                axis: "#6b7280",
                grid: "#e5e7eb",
                primary: "#10b981",
                secondary: "#648fff",
                series: ["#10b981", "#648fff", "#f59e0b", "#e11d48", "#785ef0", "#0891b2"],
            }
        }
    }
}

/// Renders `build()` into the element with `chart_id` inside the container,
/// then re-renders it after window resizes settle.
///
/// The returned listener must live as long as the chart is mounted.
pub fn mount_chart<F>(container_ref: &NodeRef, chart_id: &'static str, build: F) -> Option<EventListener>
where
    F: Fn() -> CharmingChart + 'static,
{
    let container = container_ref.cast::<HtmlElement>()?;
    render_chart(&container, chart_id, &build());

    debounced_resize_listener(
        move || render_chart(&container, chart_id, &build()),
        Config::RESIZE_DEBOUNCE_MS,
    )
}

fn render_chart(container: &HtmlElement, chart_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(&format!("Render error in {chart_id}: {e:?}"));
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartEmptyProps {
    pub message: AttrValue,
}

/// Stand-in for a chart whose series is empty.
#[function_component(ChartEmpty)]
pub fn chart_empty(props: &ChartEmptyProps) -> Html {
    html! {
        <div class="chart-container chart-empty">
            <p>{props.message.clone()}</p>
        </div>
    }
}
