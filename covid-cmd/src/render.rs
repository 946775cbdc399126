//! Plain-text rendering of the results table and pagination strip.

use covid_state::pagination::{ControlKind, PageControl};
use covid_state::table::{TableBody, COLUMN_HEADERS};

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Header line, separator, then one line per row. A cleared body prints
/// the header only.
pub fn table(body: &TableBody) -> String {
    let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
    if let TableBody::Rows(rows) = body {
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = Vec::new();
    out.push(line(COLUMN_HEADERS.iter().copied(), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    match body {
        TableBody::Cleared => {}
        TableBody::Placeholder { message, .. } => out.push(message.to_string()),
        TableBody::Rows(rows) => {
            for row in rows {
                out.push(line(row.cells.iter().map(String::as_str), &widths));
            }
        }
    }
    out.join("\n")
}

/// `< Anterior  [1]  2  3  Próxima >`, with disabled arrows left out.
pub fn pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .filter(|c| !c.disabled)
        .map(|c| match c.kind {
            ControlKind::Previous => format!("< {}", c.label),
            ControlKind::Next => format!("{} >", c.label),
            ControlKind::Page if c.active => format!("[{}]", c.label),
            ControlKind::Page => c.label.clone(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
