//! COVID-19 Case Dashboard
//!
//! Single page with two sections, query and dataset management, switched
//! from the navigation bar. All data comes from the case API served on the
//! same origin as the page.
//!
//! Data flow:
//! 1. On mount: fetch the state list into the region selector.
//! 2. Changing the state loads its municipalities.
//! 3. Submitting the filter form fetches matching records once; paging
//!    through them happens in memory.
//! 4. "Visualizar Gráfico" fetches the aggregated series for the same
//!    filters and switches the results area to the chart; a toggle flips
//!    back to the table.
//! 5. Management buttons confirm, call the API and report in their own
//!    notification area. A successful purge empties the results table.

use covid_state::{NoticeRegion, ResultView, Section};
use covid_ui::browser::page_origin;
use covid_ui::components::{
    CasesChart, FilterForm, LoadingSpinner, ManagementPanel, NavBar, NotificationBox,
    PaginationStrip, ResultsTable, ViewToggle,
};
use covid_ui::state::DashboardState;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-dashboard-root"))
        .launch(App);
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[component]
fn App() -> Element {
    let dash = use_context_provider(|| {
        let origin = page_origin();
        info!("Using case API at {}", origin);
        DashboardState::new(origin)
    });

    // ─── Load the state list once on mount ───
    use_effect(move || {
        let controller = dash.controller();
        spawn(async move {
            controller.load_regions().await;
        });
    });

    let section = dash.ui.read().section;

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px; margin: 8px 0 12px 0;",
                "Painel COVID-19"
            }

            NavBar {}

            div {
                id: Section::Query.dom_id(),
                style: display(section.is_visible(Section::Query)),
                QuerySection {}
            }
            div {
                id: Section::Management.dom_id(),
                style: display(section.is_visible(Section::Management)),
                ManagementSection {}
            }
        }
    }
}

#[component]
fn QuerySection() -> Element {
    let dash = use_context::<DashboardState>();
    let view = dash.ui.read().view;

    rsx! {
        h2 { style: "font-size: 18px;", {Section::Query.label()} }
        NotificationBox { region: NoticeRegion::Query }
        FilterForm {}
        LoadingSpinner {}
        ViewToggle {}
        div {
            style: display(view == ResultView::Table),
            ResultsTable {}
            PaginationStrip {}
        }
        div {
            style: display(view == ResultView::Chart),
            CasesChart {}
        }
    }
}

#[component]
fn ManagementSection() -> Element {
    rsx! {
        h2 { style: "font-size: 18px;", {Section::Management.label()} }
        p {
            style: "font-size: 13px; color: #666; margin: 0 0 4px 0;",
            "Importe, atualize ou limpe o dataset armazenado no servidor."
        }
        NotificationBox { region: NoticeRegion::Management }
        ManagementPanel {}
    }
}
