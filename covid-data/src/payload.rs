//! Response body decoding.
//!
//! The documented contract is a bare JSON array for every list endpoint.
//! The reference Flask backend wraps the same lists in an object
//! (`{"states": [...]}`, `{"cities": [...]}`, `{"data": [...], "total_records": n}`),
//! so both shapes are accepted here.

use crate::record::{Record, RecordSet};
use crate::region::Region;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RegionEntry {
    Full(Region),
    Bare(String),
}

impl From<RegionEntry> for Region {
    fn from(entry: RegionEntry) -> Self {
        match entry {
            RegionEntry::Full(region) => region,
            RegionEntry::Bare(code) => Region::bare(code),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegionPayload {
    Listed(Vec<RegionEntry>),
    Wrapped { states: Vec<RegionEntry> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SubregionPayload {
    Listed(Vec<String>),
    Wrapped { cities: Vec<String> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordPayload {
    Listed(Vec<Record>),
    Paged {
        data: Vec<Record>,
        #[serde(default)]
        total_records: Option<usize>,
    },
}

/// Decode the body of the region list endpoint.
pub fn parse_regions(body: &str) -> serde_json::Result<Vec<Region>> {
    let entries = match serde_json::from_str::<RegionPayload>(body)? {
        RegionPayload::Listed(entries) => entries,
        RegionPayload::Wrapped { states } => states,
    };
    Ok(entries.into_iter().map(Region::from).collect())
}

/// Decode the body of the sub-region list endpoint.
pub fn parse_subregions(body: &str) -> serde_json::Result<Vec<String>> {
    Ok(match serde_json::from_str::<SubregionPayload>(body)? {
        SubregionPayload::Listed(names) => names,
        SubregionPayload::Wrapped { cities } => cities,
    })
}

/// Decode the body of the query endpoint into a result set, preserving order.
///
/// A paged envelope keeps the server's match count, which may exceed the
/// number of rows it sent.
pub fn parse_records(body: &str) -> serde_json::Result<RecordSet> {
    Ok(match serde_json::from_str::<RecordPayload>(body)? {
        RecordPayload::Listed(records) => RecordSet::complete(records),
        RecordPayload::Paged {
            data,
            total_records,
        } => RecordSet {
            records: data,
            total_records,
        },
    })
}
