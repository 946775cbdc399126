//! Results table of the query section.

use crate::state::DashboardState;
use covid_state::table::{TableBody, COLUMN_HEADERS};
use dioxus::prelude::*;

const CELL_STYLE: &str = "padding: 6px 10px; border-bottom: 1px solid #eee;";

fn body_rows(body: TableBody) -> Element {
    match body {
        TableBody::Cleared => rsx! {},
        TableBody::Placeholder { message, colspan } => rsx! {
            tr {
                td {
                    colspan: "{colspan}",
                    style: "padding: 16px; text-align: center; color: #888;",
                    "{message}"
                }
            }
        },
        TableBody::Rows(rows) => rsx! {
            for (i, row) in rows.iter().enumerate() {
                tr {
                    key: "{i}",
                    for cell in row.cells.iter() {
                        td { style: CELL_STYLE, "{cell}" }
                    }
                }
            }
        },
    }
}

/// Current page of the stored result set, or a blank body while a query
/// is loading or after it failed.
#[component]
pub fn ResultsTable() -> Element {
    let dash = use_context::<DashboardState>();
    let body = dash.ui.read().query.table();

    rsx! {
        table {
            id: "tabela-resultados",
            style: "width: 100%; border-collapse: collapse; margin-top: 12px; font-size: 14px;",
            thead {
                tr {
                    for header in COLUMN_HEADERS {
                        th {
                            style: "padding: 6px 10px; text-align: left; border-bottom: 2px solid #ccc;",
                            "{header}"
                        }
                    }
                }
            }
            tbody { {body_rows(body)} }
        }
    }
}
