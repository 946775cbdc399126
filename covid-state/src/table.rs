//! Results table rendering.

use covid_data::{Record, COLUMN_COUNT};

pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para os filtros aplicados.";

/// Column headers, aligned with [`Record::cells`].
pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = [
    "Data",
    "Estado",
    "Município",
    "Casos Confirmados",
    "Óbitos",
    "Novos Casos",
    "Novos Óbitos",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; COLUMN_COUNT],
}

/// What the table body should contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// No rows at all: nothing queried yet, or a query in progress or failed.
    Cleared,
    /// A single full-width row carrying a message.
    Placeholder {
        message: &'static str,
        colspan: usize,
    },
    Rows(Vec<TableRow>),
}

impl TableBody {
    /// Number of `<tr>` elements this body renders to.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Cleared => 0,
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Records on page `current` (1-based). Out-of-range pages are empty.
pub fn page_slice(records: &[Record], current: usize, page_size: usize) -> &[Record] {
    let start = current.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

pub fn render_table(records: &[Record], current: usize, page_size: usize) -> TableBody {
    if records.is_empty() {
        return TableBody::Placeholder {
            message: NO_DATA_MESSAGE,
            colspan: COLUMN_COUNT,
        };
    }
    TableBody::Rows(
        page_slice(records, current, page_size)
            .iter()
            .map(|record| TableRow {
                cells: record.cells(),
            })
            .collect(),
    )
}
