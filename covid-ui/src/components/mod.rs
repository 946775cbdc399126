//! Reusable Dioxus RSX components for the dashboard.

mod cases_chart;
mod chart_options;
mod filter_form;
mod loading_spinner;
mod management_panel;
mod nav_bar;
mod notification_box;
mod pagination_strip;
mod region_selector;
mod results_table;

pub use cases_chart::CasesChart;
pub use chart_options::{ChartOptions, ViewToggle};
pub use filter_form::FilterForm;
pub use loading_spinner::LoadingSpinner;
pub use management_panel::ManagementPanel;
pub use nav_bar::NavBar;
pub use notification_box::NotificationBox;
pub use pagination_strip::PaginationStrip;
pub use region_selector::{RegionSelector, SubregionSelector};
pub use results_table::ResultsTable;
