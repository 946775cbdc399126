//! reqwest implementation of [`Backend`].
//!
//! The same code runs natively (CLI) and in the browser, where reqwest
//! delegates to `fetch`. URLs must be absolute in both cases, so the
//! caller supplies the API origin.

use crate::backend::Backend;
use crate::error::{ApiError, Result};
use covid_data::endpoints;
use covid_data::payload::{parse_records, parse_regions, parse_subregions};
use covid_data::plot::parse_plot;
use covid_data::{
    FilterCriteria, Operation, OperationRequest, OperationResponse, PlotData, PlotRequest,
    RecordSet, Region,
};
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};

/// HTTP client bound to one API origin.
///
/// Cheap to clone: the inner reqwest `Client` is reference counted.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    /// Send a request and return the body of a 2xx response.
    async fn fetch_text(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}", response.url(), status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            });
        }
        Ok(response.text().await?)
    }
}

fn method_for(operation: Operation) -> Method {
    match operation {
        Operation::Import => Method::POST,
        Operation::Refresh => Method::PUT,
        Operation::Purge => Method::DELETE,
    }
}

/// Interpret a management reply. The body is parsed whatever the status.
pub(crate) fn decode_operation(
    operation: Operation,
    status: u16,
    success: bool,
    body: &str,
) -> Result<String> {
    match serde_json::from_str::<OperationResponse>(body) {
        Ok(reply) if success => Ok(reply
            .message
            .unwrap_or_else(|| operation.success_fallback().to_string())),
        Ok(reply) => Err(ApiError::Status {
            status,
            message: reply.message,
        }),
        Err(e) if success => Err(ApiError::Decode(e)),
        Err(_) => Err(ApiError::Status {
            status,
            message: None,
        }),
    }
}

impl Backend for HttpBackend {
    async fn regions(&self) -> Result<Vec<Region>> {
        let url = self.url(endpoints::REGIONS);
        debug!("GET {}", url);
        let body = self.fetch_text(self.client.get(&url)).await?;
        Ok(parse_regions(&body)?)
    }

    async fn subregions(&self, region_code: &str) -> Result<Vec<String>> {
        let url = self.url(endpoints::SUBREGIONS);
        debug!("GET {} estado={}", url, region_code);
        let request = self
            .client
            .get(&url)
            .query(&[(endpoints::SUBREGION_REGION_PARAM, region_code)]);
        let body = self.fetch_text(request).await?;
        Ok(parse_subregions(&body)?)
    }

    async fn query_records(&self, criteria: &FilterCriteria) -> Result<RecordSet> {
        let url = self.url(endpoints::QUERY);
        let pairs = criteria.query_pairs();
        debug!("GET {} {:?}", url, pairs);
        let body = self.fetch_text(self.client.get(&url).query(&pairs)).await?;
        let set = parse_records(&body)?;
        if set.is_truncated() {
            warn!(
                "{} sent {} of {} matching records",
                url,
                set.records.len(),
                set.total()
            );
        }
        Ok(set)
    }

    async fn plot_data(&self, request: &PlotRequest) -> Result<PlotData> {
        let url = self.url(endpoints::PLOT);
        let pairs = request.query_pairs();
        debug!("GET {} {:?}", url, pairs);
        let body = self.fetch_text(self.client.get(&url).query(&pairs)).await?;
        Ok(parse_plot(&body)?)
    }

    async fn run_operation(
        &self,
        operation: Operation,
        request: &OperationRequest,
    ) -> Result<String> {
        let url = self.url(operation.path());
        let method = method_for(operation);
        debug!("{} {}", method, url);
        let mut builder = self.client.request(method, &url);
        if operation.sends_body() {
            builder = builder.json(request);
        } else {
            builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_operation(operation, status.as_u16(), status.is_success(), &body)
    }
}
