//! Result set, pagination and loading state of the query section.

use crate::pagination::{self, PageControl, PaginationState};
use crate::table::{self, TableBody};
use covid_data::Record;

/// Identifies one query submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

/// Owner of the last successful result set.
///
/// `displayed` separates what is stored from what is on screen: a new
/// submission blanks the table while it loads, and a failed one leaves it
/// blank, but the stored records survive until the next success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    results: Vec<Record>,
    pagination: PaginationState,
    displayed: bool,
    loading: bool,
    latest: u64,
}

impl QueryState {
    /// Start a submission: loading on, table and pagination blanked.
    pub fn begin(&mut self) -> QueryTicket {
        self.latest += 1;
        self.loading = true;
        self.displayed = false;
        QueryTicket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent submission.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Store the records of a successful submission and show page 1.
    /// Outdated submissions are ignored.
    pub fn accept(&mut self, ticket: QueryTicket, records: Vec<Record>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.results = records;
        self.pagination.reset();
        self.displayed = true;
        self.loading = false;
        true
    }

    /// End a failed submission, keeping the stored records untouched.
    pub fn reject(&mut self, ticket: QueryTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Drop every stored record and show the empty table.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.pagination.reset();
        self.displayed = true;
    }

    /// Jump to `page` of the displayed result set.
    pub fn select_page(&mut self, page: usize) -> bool {
        if !self.displayed {
            return false;
        }
        self.pagination.select(page, self.results.len())
    }

    pub fn results(&self) -> &[Record] {
        &self.results
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.results.len(), self.pagination.page_size())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn table(&self) -> TableBody {
        if !self.displayed {
            return TableBody::Cleared;
        }
        table::render_table(
            &self.results,
            self.pagination.current_page(),
            self.pagination.page_size(),
        )
    }

    pub fn pagination_controls(&self) -> Vec<PageControl> {
        if !self.displayed {
            return Vec::new();
        }
        pagination::render_pagination(
            self.results.len(),
            self.pagination.current_page(),
            self.pagination.page_size(),
        )
    }
}
