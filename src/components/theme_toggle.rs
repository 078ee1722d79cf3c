use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub dark_mode: bool,
    pub on_toggle: Callback<()>,
}

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let (icon, label) = if props.dark_mode {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
