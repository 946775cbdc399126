//! Time series for the case chart.
//!
//! The plot endpoint aggregates on the server and answers with parallel
//! arrays: `dates`, plus either one `cases`/`deaths` pair or, when grouped
//! by state or municipality, a `labels` list with `cases_<label>` and
//! `deaths_<label>` arrays per label.

use crate::filter::FilterCriteria;
use serde_json::{Map, Value};

/// Label of the single series of an ungrouped chart.
pub const TOTAL_SERIES_LABEL: &str = "Total";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// New cases and new deaths per day.
    #[default]
    Daily,
    /// Running totals of cases and deaths.
    Cumulative,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Daily, ChartKind::Cumulative];

    /// Value of the `chart_type` query parameter.
    pub fn param(self) -> &'static str {
        match self {
            ChartKind::Daily => "Casos Diários vs. Óbitos Diários",
            ChartKind::Cumulative => "Casos Acumulados vs. Óbitos Acumulados",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Daily => "Casos e óbitos diários",
            ChartKind::Cumulative => "Casos e óbitos acumulados",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.param() == param)
    }
}

/// How the server groups the series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Aggregation {
    #[default]
    None,
    State,
    City,
}

impl Aggregation {
    pub const ALL: [Aggregation; 3] = [Aggregation::None, Aggregation::State, Aggregation::City];

    /// Value of the `aggregation` query parameter.
    pub fn param(self) -> &'static str {
        match self {
            Aggregation::None => "Nenhum",
            Aggregation::State => "Estado",
            Aggregation::City => "Cidade",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Aggregation::None => "Sem agrupamento",
            Aggregation::State => "Por estado",
            Aggregation::City => "Por município",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.param() == param)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotRequest {
    pub criteria: FilterCriteria,
    pub chart: ChartKind,
    pub aggregation: Aggregation,
}

impl PlotRequest {
    /// The filter parameters followed by `chart_type` and `aggregation`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.criteria.query_pairs();
        pairs.push(("chart_type", self.chart.param().to_string()));
        pairs.push(("aggregation", self.aggregation.param().to_string()));
        pairs
    }
}

/// One labelled pair of lines. Gaps are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub cases: Vec<Option<f64>>,
    pub deaths: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotData {
    pub dates: Vec<String>,
    pub series: Vec<PlotSeries>,
}

impl PlotData {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.series.is_empty()
    }

    /// Largest value over every series, or 0 when there is none.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.cases.iter().chain(s.deaths.iter()))
            .flatten()
            .fold(0.0, |max, v| v.max(max))
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        other => other.as_f64(),
    }
}

fn column(map: &Map<String, Value>, key: &str) -> Vec<Option<f64>> {
    map.get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().map(number).collect())
        .unwrap_or_default()
}

/// Decode the body of the plot endpoint.
///
/// An object without `dates`, or without any series, decodes to an empty
/// chart. Anything but a JSON object is an error.
pub fn parse_plot(body: &str) -> serde_json::Result<PlotData> {
    let map: Map<String, Value> = serde_json::from_str(body)?;

    let Some(dates) = map.get("dates").and_then(Value::as_array) else {
        return Ok(PlotData::default());
    };
    let dates: Vec<String> = dates.iter().map(text).collect();

    let labels: Vec<String> = map
        .get("labels")
        .and_then(Value::as_array)
        .map(|labels| labels.iter().map(text).collect())
        .unwrap_or_default();

    let series = if labels.is_empty() {
        if !map.contains_key("cases") {
            return Ok(PlotData::default());
        }
        vec![PlotSeries {
            label: TOTAL_SERIES_LABEL.to_string(),
            cases: column(&map, "cases"),
            deaths: column(&map, "deaths"),
        }]
    } else {
        labels
            .into_iter()
            .map(|label| PlotSeries {
                cases: column(&map, &format!("cases_{label}")),
                deaths: column(&map, &format!("deaths_{label}")),
                label,
            })
            .collect()
    };

    Ok(PlotData { dates, series })
}
