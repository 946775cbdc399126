//! Dataset management section: import, refresh, purge.

use crate::state::DashboardState;
use covid_data::Operation;
use dioxus::prelude::*;

fn button_style(operation: Operation) -> &'static str {
    if operation.is_irreversible() {
        "padding: 10px 16px; background: #C62828; color: white; border: none; border-radius: 4px; cursor: pointer;"
    } else {
        "padding: 10px 16px; background: #1565C0; color: white; border: none; border-radius: 4px; cursor: pointer;"
    }
}

/// One button per operation. Each asks for confirmation before sending.
#[component]
pub fn ManagementPanel() -> Element {
    let dash = use_context::<DashboardState>();

    rsx! {
        div {
            style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
            for operation in Operation::ALL {
                button {
                    key: "{operation:?}",
                    style: button_style(operation),
                    onclick: move |_| {
                        let controller = dash.controller();
                        spawn(async move {
                            controller.run_operation(operation).await;
                        });
                    },
                    {operation.label()}
                }
            }
        }
        p {
            style: "font-size: 12px; color: #888;",
            "A limpeza da base de dados não pode ser desfeita."
        }
    }
}
