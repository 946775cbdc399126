//! The single owned UI-state value.
//!
//! `UiState` bundles every part of the page. The web app keeps one in a
//! Dioxus signal provided via context; the CLI keeps one in a `RefCell`.

use crate::notification::Notifications;
use crate::plot::{PlotState, ResultView};
use crate::query::QueryState;
use crate::section::SectionRouter;
use crate::selectors::{RegionSelector, SubregionSelector};
use covid_data::{FilterCriteria, FormError, PlotRequest};

/// Raw date inputs of the filter form. Region and sub-region values live
/// in their selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub section: SectionRouter,
    pub notifications: Notifications,
    pub regions: RegionSelector,
    pub subregions: SubregionSelector,
    pub form: FilterForm,
    pub query: QueryState,
    pub plot: PlotState,
    pub view: ResultView,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria from the current form values, built fresh on every call.
    pub fn criteria(&self) -> Result<FilterCriteria, FormError> {
        FilterCriteria::from_form(
            &self.form.start_date,
            &self.form.end_date,
            self.regions.selected(),
            self.subregions.selected(),
        )
    }

    /// Chart request from the form values and the chart options.
    pub fn plot_request(&self) -> Result<PlotRequest, FormError> {
        Ok(self.plot.request(self.criteria()?))
    }
}
