//! Region and dependent sub-region dropdowns.

use crate::state::DashboardState;
use dioxus::prelude::*;

/// State dropdown. Changing it reloads the municipality list.
#[component]
pub fn RegionSelector() -> Element {
    let dash = use_context::<DashboardState>();
    let (options, selected) = {
        let ui = dash.ui.read();
        (ui.regions.options().to_vec(), ui.regions.selected().to_string())
    };

    let on_change = move |evt: Event<FormData>| {
        let code = evt.value();
        let controller = dash.controller();
        spawn(async move {
            controller.change_region(&code).await;
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "estado",
                style: "font-weight: bold; margin-right: 8px;",
                "Estado: "
            }
            select {
                id: "estado",
                onchange: on_change,
                for option in options.iter() {
                    option {
                        value: "{option.value}",
                        selected: option.value == selected,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

/// Municipality dropdown. Disabled until a state's list has loaded.
#[component]
pub fn SubregionSelector() -> Element {
    let dash = use_context::<DashboardState>();
    let (options, selected, enabled) = {
        let ui = dash.ui.read();
        (
            ui.subregions.options().to_vec(),
            ui.subregions.selected().to_string(),
            ui.subregions.is_enabled(),
        )
    };

    let on_change = move |evt: Event<FormData>| {
        dash.controller().select_subregion(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "municipio",
                style: "font-weight: bold; margin-right: 8px;",
                "Município: "
            }
            select {
                id: "municipio",
                disabled: !enabled,
                onchange: on_change,
                for option in options.iter() {
                    option {
                        value: "{option.value}",
                        selected: option.value == selected,
                        "{option.label}"
                    }
                }
            }
        }
    }
}
