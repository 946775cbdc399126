//! Query filter form: date range, state, municipality and chart options.

use super::{ChartOptions, RegionSelector, SubregionSelector};
use crate::state::DashboardState;
use dioxus::prelude::*;

#[component]
pub fn FilterForm() -> Element {
    let mut dash = use_context::<DashboardState>();
    let (start, end) = {
        let ui = dash.ui.read();
        (ui.form.start_date.clone(), ui.form.end_date.clone())
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let controller = dash.controller();
        spawn(async move {
            controller.submit_form().await;
        });
    };

    rsx! {
        form {
            id: "filtro-form",
            onsubmit: on_submit,
            div {
                style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
                label {
                    style: "font-weight: bold;",
                    "Data inicial: "
                    input {
                        id: "data_inicial",
                        r#type: "date",
                        value: "{start}",
                        oninput: move |evt: Event<FormData>| {
                            dash.ui.write().form.start_date = evt.value();
                        },
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "Data final: "
                    input {
                        id: "data_final",
                        r#type: "date",
                        value: "{end}",
                        oninput: move |evt: Event<FormData>| {
                            dash.ui.write().form.end_date = evt.value();
                        },
                    }
                }
            }
            RegionSelector {}
            SubregionSelector {}
            button {
                r#type: "submit",
                style: "margin-top: 8px; padding: 8px 20px; background: #1565C0; color: white; border: none; border-radius: 4px; cursor: pointer;",
                "Consultar"
            }
            ChartOptions {}
        }
    }
}
