//! Navigation between the two sections.

use crate::state::DashboardState;
use covid_state::Section;
use dioxus::prelude::*;

fn button_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 10px 18px; border: none; border-bottom: 3px solid #1565C0; background: none; color: #1565C0; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 10px 18px; border: none; border-bottom: 3px solid transparent; background: none; color: #555; cursor: pointer;"
    }
}

/// One button per section. The button of the visible section is marked active.
#[component]
pub fn NavBar() -> Element {
    let dash = use_context::<DashboardState>();
    let active = dash.ui.read().section.active();

    rsx! {
        nav {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #e0e0e0; margin-bottom: 16px;",
            for section in Section::ALL {
                button {
                    key: "{section:?}",
                    class: button_class(section == active),
                    style: button_style(section == active),
                    onclick: move |_| dash.controller().show_section(section),
                    {section.label()}
                }
            }
        }
    }
}
