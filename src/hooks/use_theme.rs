use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "call-analytics-theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference. `System` follows the browser's color scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Resolves `System` against the detected scheme.
    pub fn resolve(self, system_dark: bool) -> Self {
        match self {
            Theme::System if system_dark => Theme::Dark,
            Theme::System => Theme::Light,
            explicit => explicit,
        }
    }

    /// The explicit theme a toggle click switches to.
    pub fn toggled(self, system_dark: bool) -> Self {
        match self.resolve(system_dark) {
            Theme::Dark => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Value of the `data-theme` attribute on `<html>`.
    pub fn attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light | Theme::System => "light",
        }
    }
}

/// Handle returned by `use_theme`
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub dark_mode: bool,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let preference = use_state(|| load_preference().unwrap_or_default());
    let system_dark = use_state(detect_system_dark);

    let effective = preference.resolve(*system_dark);

    use_effect_with(effective, |theme| {
        apply_to_document(*theme);
        || ()
    });

    {
        let system_dark = system_dark.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_scheme(system_dark.setter());
            move || drop(listener)
        });
    }

    use_effect_with(*preference, |theme| {
        save_preference(*theme);
        || ()
    });

    let toggle = {
        let preference = preference.clone();
        let system_dark = *system_dark;
        Callback::from(move |()| preference.set(preference.toggled(system_dark)))
    };

    ThemeHandle {
        dark_mode: effective == Theme::Dark,
        toggle,
    }
}

fn detect_system_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.attr()) {
            gloo::console::warn!(&format!("Failed to apply theme: {e:?}"));
        }
    }
}

fn load_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        gloo::console::warn!(&format!("Failed to save theme: {e:?}"));
    }
}

fn watch_system_scheme(setter: UseStateSetter<bool>) -> Option<EventListener> {
    let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
    let target = query.dyn_into::<web_sys::EventTarget>().ok()?;

    Some(EventListener::new(&target, "change", move |_| {
        setter.set(detect_system_dark());
    }))
}
