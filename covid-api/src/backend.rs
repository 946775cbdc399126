use crate::error::Result;
use covid_data::{FilterCriteria, Operation, OperationRequest, PlotData, PlotRequest, RecordSet, Region};

/// The external case API as seen by the dashboard.
///
/// Futures are not required to be `Send`: every implementation runs on a
/// single event loop (the browser, or a current-thread runtime in tests).
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Fixed list of states for the region filter.
    async fn regions(&self) -> Result<Vec<Region>>;

    /// Municipalities of one state.
    async fn subregions(&self, region_code: &str) -> Result<Vec<String>>;

    /// Records matching `criteria`, with the server's match count when it
    /// reports one.
    async fn query_records(&self, criteria: &FilterCriteria) -> Result<RecordSet>;

    /// Aggregated case and death series for the chart.
    async fn plot_data(&self, request: &PlotRequest) -> Result<PlotData>;

    /// Run a dataset operation and return the message to show on success.
    async fn run_operation(
        &self,
        operation: Operation,
        request: &OperationRequest,
    ) -> Result<String>;
}

impl<T: Backend> Backend for &T {
    async fn regions(&self) -> Result<Vec<Region>> {
        (**self).regions().await
    }

    async fn subregions(&self, region_code: &str) -> Result<Vec<String>> {
        (**self).subregions(region_code).await
    }

    async fn query_records(&self, criteria: &FilterCriteria) -> Result<RecordSet> {
        (**self).query_records(criteria).await
    }

    async fn plot_data(&self, request: &PlotRequest) -> Result<PlotData> {
        (**self).plot_data(request).await
    }

    async fn run_operation(
        &self,
        operation: Operation,
        request: &OperationRequest,
    ) -> Result<String> {
        (**self).run_operation(operation, request).await
    }
}
