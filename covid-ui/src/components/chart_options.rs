//! Chart options, the "Visualizar Gráfico" button and the table/chart toggle.

use crate::state::DashboardState;
use covid_data::{Aggregation, ChartKind};
use covid_state::ResultView;
use dioxus::prelude::*;

/// Chart kind and grouping dropdowns plus the button that fetches the chart.
#[component]
pub fn ChartOptions() -> Element {
    let mut dash = use_context::<DashboardState>();
    let (chart, aggregation) = {
        let ui = dash.ui.read();
        (ui.plot.chart, ui.plot.aggregation)
    };

    let on_plot = move |_| {
        let controller = dash.controller();
        spawn(async move {
            controller.submit_plot_form().await;
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Tipo de gráfico: "
                select {
                    id: "chart_type",
                    onchange: move |evt: Event<FormData>| {
                        dash.ui.write().plot.chart = ChartKind::from_param(&evt.value()).unwrap_or_default();
                    },
                    for kind in ChartKind::ALL {
                        option {
                            value: kind.param(),
                            selected: kind == chart,
                            {kind.label()}
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Agrupar: "
                select {
                    id: "aggregation",
                    onchange: move |evt: Event<FormData>| {
                        dash.ui.write().plot.aggregation = Aggregation::from_param(&evt.value()).unwrap_or_default();
                    },
                    for group in Aggregation::ALL {
                        option {
                            value: group.param(),
                            selected: group == aggregation,
                            {group.label()}
                        }
                    }
                }
            }
            button {
                r#type: "button",
                style: "padding: 8px 20px; background: #2E7D32; color: white; border: none; border-radius: 4px; cursor: pointer;",
                onclick: on_plot,
                "Visualizar Gráfico"
            }
        }
    }
}

fn toggle_label(view: ResultView) -> &'static str {
    match view {
        ResultView::Table => "Ver gráfico",
        ResultView::Chart => "Ver tabela",
    }
}

/// Switches between the table and the last chart. Hidden until a chart
/// has been fetched.
#[component]
pub fn ViewToggle() -> Element {
    let dash = use_context::<DashboardState>();
    let (view, has_chart) = {
        let ui = dash.ui.read();
        (ui.view, ui.plot.data().is_some())
    };
    if !has_chart {
        return rsx! {};
    }

    let other = match view {
        ResultView::Table => ResultView::Chart,
        ResultView::Chart => ResultView::Table,
    };

    rsx! {
        button {
            r#type: "button",
            style: "margin: 8px 0; padding: 4px 12px; background: white; color: #1565C0; border: 1px solid #1565C0; border-radius: 4px; cursor: pointer;",
            onclick: move |_| dash.controller().show_view(other),
            {toggle_label(view)}
        }
    }
}
