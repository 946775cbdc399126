//! CSV export of a result set and of chart series.

use covid_data::{PlotData, Record, FIELD_NAMES};
use std::io::Write;

/// Write `records` under a header row named after the record fields.
/// The header is written even when there are no records. Missing values
/// are left empty; arrays and objects are written as JSON text.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(FIELD_NAMES)?;
    for record in records {
        wtr.write_record(
            record
                .fields()
                .map(|value| value.map(|v| v.to_string()).unwrap_or_default()),
        )?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_records_to_path(path: &str, records: &[Record]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)
}

/// Write the chart as one row per date with a cases and a deaths column
/// per series. Gaps are left empty.
pub fn write_plot<W: Write>(writer: W, data: &PlotData) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = vec!["date".to_string()];
    for series in &data.series {
        header.push(format!("{} casos", series.label));
        header.push(format!("{} óbitos", series.label));
    }
    wtr.write_record(&header)?;

    let cell = |values: &[Option<f64>], i: usize| {
        values
            .get(i)
            .copied()
            .flatten()
            .map(|v| v.to_string())
            .unwrap_or_default()
    };
    for (i, date) in data.dates.iter().enumerate() {
        let mut row = vec![date.clone()];
        for series in &data.series {
            row.push(cell(&series.cases, i));
            row.push(cell(&series.deaths, i));
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
