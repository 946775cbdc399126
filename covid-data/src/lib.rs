//! Wire types shared by the COVID-19 dashboard crates.
//!
//! Nothing here performs I/O. The HTTP client lives in `covid-api` and the
//! UI state in `covid-state`; both speak in the types defined below.

pub mod dates;
pub mod endpoints;
pub mod filter;
pub mod operation;
pub mod payload;
pub mod plot;
pub mod record;
pub mod region;

pub use filter::{FilterCriteria, FormError};
pub use operation::{Operation, OperationRequest, OperationResponse};
pub use plot::{Aggregation, ChartKind, PlotData, PlotRequest, PlotSeries};
pub use record::{FieldValue, Record, RecordSet, COLUMN_COUNT, FIELD_NAMES, NOT_AVAILABLE};
pub use region::Region;
