use yew::prelude::*;

use crate::utils::format::PLACEHOLDER;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    /// `None` renders the placeholder.
    pub value: Option<AttrValue>,
    pub label: AttrValue,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let (value, value_class) = match &props.value {
        Some(value) => (value.clone(), "metric-value"),
        None => (AttrValue::Static(PLACEHOLDER), "metric-value missing"),
    };

    html! {
        <div class="metric-card">
            <p class={value_class}>{value}</p>
            <p class="metric-label">{props.label.clone()}</p>
            <h3 class="metric-title">{props.title.clone()}</h3>
        </div>
    }
}
