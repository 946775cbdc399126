//! Chart options and the last chart fetched.

use covid_data::{Aggregation, ChartKind, FilterCriteria, PlotData, PlotRequest};

/// What the results area shows below the filter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultView {
    #[default]
    Table,
    Chart,
}

/// Identifies one chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotTicket(u64);

/// Same latest-wins rule as the query: only the most recent request may
/// store its series or end the loading state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotState {
    pub chart: ChartKind,
    pub aggregation: Aggregation,
    data: Option<PlotData>,
    loading: bool,
    latest: u64,
}

impl PlotState {
    pub fn request(&self, criteria: FilterCriteria) -> PlotRequest {
        PlotRequest {
            criteria,
            chart: self.chart,
            aggregation: self.aggregation,
        }
    }

    pub fn begin(&mut self) -> PlotTicket {
        self.latest += 1;
        self.loading = true;
        PlotTicket(self.latest)
    }

    pub fn accept(&mut self, ticket: PlotTicket, data: PlotData) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.data = Some(data);
        self.loading = false;
        true
    }

    /// End a failed request. The previous chart is kept.
    pub fn reject(&mut self, ticket: PlotTicket) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn data(&self) -> Option<&PlotData> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
