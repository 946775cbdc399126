//! Line chart of cases and deaths, drawn as inline SVG.

use crate::state::DashboardState;
use covid_state::chart::{build_figure, CHART_HEIGHT, CHART_MARGIN, CHART_WIDTH};
use dioxus::prelude::*;

fn dash_pattern(dashed: bool) -> &'static str {
    if dashed {
        "6 4"
    } else {
        "none"
    }
}

#[component]
pub fn CasesChart() -> Element {
    let dash = use_context::<DashboardState>();
    let figure = dash.ui.read().plot.data().and_then(build_figure);
    let Some(figure) = figure else {
        return rsx! {
            div {
                style: "text-align: center; padding: 24px; color: #666;",
                "Nenhum dado para exibir."
            }
        };
    };

    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);
    let left = CHART_MARGIN;
    let right = CHART_WIDTH - CHART_MARGIN;
    let top = CHART_MARGIN;
    let bottom = CHART_HEIGHT - CHART_MARGIN;
    let max_y = top - 8.0;
    let date_y = bottom + 18.0;
    let max_label = format!("{}", figure.max_value);

    rsx! {
        div {
            id: "grafico",
            style: "min-height: 400px; width: 100%;",
            svg {
                view_box: "{view_box}",
                width: "100%",
                line { x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}", stroke: "#999" }
                line { x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}", stroke: "#999" }
                text { x: "{left}", y: "{max_y}", font_size: "11", fill: "#666", "{max_label}" }
                text { x: "{left}", y: "{date_y}", font_size: "11", fill: "#666", "{figure.first_date}" }
                text { x: "{right}", y: "{date_y}", font_size: "11", fill: "#666", text_anchor: "end", "{figure.last_date}" }
                for series_line in figure.lines.iter() {
                    polyline {
                        points: "{series_line.points}",
                        fill: "none",
                        stroke: series_line.color,
                        stroke_width: "2",
                        stroke_dasharray: dash_pattern(series_line.dashed),
                    }
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; font-size: 12px; margin-top: 4px;",
                for series_line in figure.lines.iter() {
                    span {
                        style: "display: inline-flex; align-items: center; gap: 4px;",
                        svg {
                            width: "24",
                            height: "8",
                            line {
                                x1: "0", y1: "4", x2: "24", y2: "4",
                                stroke: series_line.color,
                                stroke_width: "2",
                                stroke_dasharray: dash_pattern(series_line.dashed),
                            }
                        }
                        "{series_line.label}"
                    }
                }
            }
        }
    }
}
