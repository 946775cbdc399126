//! Pagination controls under the results table.

use crate::state::DashboardState;
use covid_state::pagination::PageControl;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct PageButtonProps {
    control: PageControl,
}

#[component]
fn PageButton(props: PageButtonProps) -> Element {
    let dash = use_context::<DashboardState>();
    let PageControl {
        label,
        target,
        active,
        disabled,
        ..
    } = props.control;

    let class = if active { "page-item active" } else { "page-item" };
    let style = if active {
        "padding: 4px 10px; border: 1px solid #1565C0; background: #1565C0; color: white; border-radius: 3px;"
    } else {
        "padding: 4px 10px; border: 1px solid #ccc; background: white; color: #1565C0; border-radius: 3px; cursor: pointer;"
    };

    rsx! {
        li {
            class: class,
            button {
                class: "page-link",
                style: style,
                disabled: disabled,
                onclick: move |_| {
                    if !disabled {
                        dash.controller().select_page(target);
                    }
                },
                "{label}"
            }
        }
    }
}

/// Previous, numbered window, next. Empty when everything fits on one page.
#[component]
pub fn PaginationStrip() -> Element {
    let dash = use_context::<DashboardState>();
    let controls = dash.ui.read().query.pagination_controls();
    if controls.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            id: "paginacao",
            style: "display: flex; gap: 4px; list-style: none; padding: 0; margin: 12px 0; justify-content: center;",
            for control in controls {
                PageButton { key: "{control.label}", control: control.clone() }
            }
        }
    }
}
