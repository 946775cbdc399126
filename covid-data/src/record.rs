use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel rendered for any field the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of columns in the results table.
pub const COLUMN_COUNT: usize = 7;

/// Field names of a [`Record`], in table column order.
pub const FIELD_NAMES: [&str; COLUMN_COUNT] = [
    "date",
    "state",
    "city",
    "confirmed_cases",
    "deaths",
    "new_cases",
    "new_deaths",
];

/// One column value as the backend sends it.
///
/// Rows are rendered as received, so any JSON value is accepted. Counts
/// normally arrive as integers and text columns as strings, but aggregated
/// backends also send floats, booleans or preformatted numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Arrays and objects, shown as their JSON text.
    Other(serde_json::Value),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// One row of COVID-19 case data.
///
/// Every field is optional: a missing key and an explicit `null` both
/// deserialize to `None` and render as [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub date: Option<FieldValue>,
    #[serde(default)]
    pub state: Option<FieldValue>,
    #[serde(default)]
    pub city: Option<FieldValue>,
    #[serde(default)]
    pub confirmed_cases: Option<FieldValue>,
    #[serde(default)]
    pub deaths: Option<FieldValue>,
    #[serde(default)]
    pub new_cases: Option<FieldValue>,
    #[serde(default)]
    pub new_deaths: Option<FieldValue>,
}

fn text_cell(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Text(s)) if s.is_empty() => NOT_AVAILABLE.to_string(),
        _ => value_cell(value),
    }
}

fn value_cell(value: Option<&FieldValue>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

impl Record {
    /// Raw values in [`FIELD_NAMES`] order.
    pub fn fields(&self) -> [Option<&FieldValue>; COLUMN_COUNT] {
        [
            self.date.as_ref(),
            self.state.as_ref(),
            self.city.as_ref(),
            self.confirmed_cases.as_ref(),
            self.deaths.as_ref(),
            self.new_cases.as_ref(),
            self.new_deaths.as_ref(),
        ]
    }

    /// Display text for each column, in [`FIELD_NAMES`] order.
    ///
    /// Text columns treat an empty string as missing. Numeric columns only
    /// check presence, so a count of `0` is shown as `0`.
    pub fn cells(&self) -> [String; COLUMN_COUNT] {
        let [date, state, city, confirmed, deaths, new_cases, new_deaths] = self.fields();
        [
            text_cell(date),
            text_cell(state),
            text_cell(city),
            value_cell(confirmed),
            value_cell(deaths),
            value_cell(new_cases),
            value_cell(new_deaths),
        ]
    }
}

/// The rows of one query response and the number of rows that matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub records: Vec<Record>,
    /// Match count reported by a paging backend, if any.
    pub total_records: Option<usize>,
}

impl RecordSet {
    /// A response that carried every matching row.
    pub fn complete(records: Vec<Record>) -> Self {
        Self {
            records,
            total_records: None,
        }
    }

    /// Rows that matched, never less than the rows received.
    pub fn total(&self) -> usize {
        self.total_records
            .unwrap_or(0)
            .max(self.records.len())
    }

    /// Whether the server matched more rows than it sent.
    pub fn is_truncated(&self) -> bool {
        self.total() > self.records.len()
    }
}
