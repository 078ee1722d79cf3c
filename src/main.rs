use yew::prelude::*;

use call_analytics_dashboard::components::{Dashboard, Status, ThemeToggle};
use call_analytics_dashboard::hooks::{use_dashboard::use_dashboard, use_theme::use_theme};

#[function_component(App)]
fn app() -> Html {
    let state = use_dashboard();
    let theme = use_theme();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Carrier Call Analytics"}</h1>
                <ThemeToggle dark_mode={theme.dark_mode} on_toggle={theme.toggle.clone()} />
            </header>

            <main class="app-main">
                if let Some(data) = state.data() {
                    <Dashboard data={data.clone()} dark_mode={theme.dark_mode} />
                } else {
                    <Status state={(*state).clone()} />
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
