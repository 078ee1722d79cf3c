use crate::hooks::use_dashboard::DashboardState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DashboardState,
}

/// Full-page stand-in while the dashboard is loading or unavailable.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DashboardState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading call analytics..."}</p>
            </div>
        },
        DashboardState::Ready(_) => html! {},
        DashboardState::Unavailable => html! {
            <div class="status error">
                <p>{"Call analytics are unavailable right now. Please try again later."}</p>
            </div>
        },
    }
}
