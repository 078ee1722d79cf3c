use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{dashboard::DashboardData, error::AppError};
use crate::services::api::fetch_dashboard;
use wasm_bindgen_futures::spawn_local;

/// View state of the dashboard.
///
/// `Ready` and `Unavailable` are terminal: the page never goes back to
/// `Loading` without a remount.
#[derive(Clone, PartialEq, Debug)]
pub enum DashboardState {
    Loading,
    Ready(Rc<DashboardData>),
    Unavailable,
}

impl DashboardState {
    /// Settles a finished fetch. Error details are not part of the state.
    pub fn settle(result: Result<DashboardData, AppError>) -> Self {
        match result {
            Ok(data) => Self::Ready(Rc::new(data)),
            Err(_) => Self::Unavailable,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<DashboardData>> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Loads the dashboard once per mount.
#[hook]
pub fn use_dashboard() -> UseStateHandle<DashboardState> {
    let state = use_state(|| DashboardState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_dashboard().await;

                if aborted_check.get() {
                    return; // Unmounted while in flight
                }

                match &result {
                    Ok(data) => {
                        if data.duplicate_rows > 0 {
                            gloo::console::warn!(&format!(
                                "Dropped {} call log rows with a duplicate Run_ID",
                                data.duplicate_rows
                            ));
                        }
                        gloo::console::info!(&format!(
                            "Dashboard loaded: {} call logs, {} evolution days",
                            data.raw_logs.len(),
                            data.evolution.len()
                        ));
                    }
                    Err(e) => gloo::console::error!(&format!("Dashboard data unavailable: {e}")),
                }

                state.set(DashboardState::settle(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
