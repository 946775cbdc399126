//! Loading spinner component.

use crate::state::DashboardState;
use dioxus::prelude::*;

/// Shown while a query or a chart request is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    let dash = use_context::<DashboardState>();
    let loading = {
        let ui = dash.ui.read();
        ui.query.is_loading() || ui.plot.is_loading()
    };
    if !loading {
        return rsx! {};
    }

    rsx! {
        div {
            id: "loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "Carregando dados..."
        }
    }
}
