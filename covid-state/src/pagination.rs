//! Client-side pagination over an in-memory result set.

use std::ops::RangeInclusive;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Maximum number of page-number controls shown at once.
pub const PAGE_WINDOW: usize = 5;

pub const PREVIOUS_LABEL: &str = "Anterior";
pub const NEXT_LABEL: &str = "Próxima";

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Page numbers to show around `current`.
///
/// Centered on `current` with two pages either side, then widened to
/// [`PAGE_WINDOW`] pages when it runs into the first or last page.
pub fn page_window(current: usize, total: usize) -> RangeInclusive<usize> {
    if total == 0 {
        return 1..=0;
    }
    let current = current.clamp(1, total);
    let reach = PAGE_WINDOW / 2;
    let mut start = current.saturating_sub(reach).max(1);
    let mut end = (current + reach).min(total);

    if end - start < PAGE_WINDOW - 1 {
        if start == 1 {
            end = total.min(PAGE_WINDOW);
        } else if end == total {
            start = total.saturating_sub(PAGE_WINDOW - 1).max(1);
        }
    }
    start..=end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

/// One button of the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    /// Page the control jumps to.
    pub target: usize,
    pub active: bool,
    pub disabled: bool,
}

/// Controls for a result set of `len` rows, or none when everything fits
/// on a single page.
pub fn render_pagination(len: usize, current: usize, page_size: usize) -> Vec<PageControl> {
    let total = total_pages(len, page_size);
    if total <= 1 {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(PAGE_WINDOW + 2);
    controls.push(PageControl {
        kind: ControlKind::Previous,
        label: PREVIOUS_LABEL.to_string(),
        target: current.saturating_sub(1),
        active: false,
        disabled: current == 1,
    });
    controls.extend(page_window(current, total).map(|page| PageControl {
        kind: ControlKind::Page,
        label: page.to_string(),
        target: page,
        active: page == current,
        disabled: false,
    }));
    controls.push(PageControl {
        kind: ControlKind::Next,
        label: NEXT_LABEL.to_string(),
        target: current + 1,
        active: false,
        disabled: current == total,
    });
    controls
}

/// Current page of the stored result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to `target` if it is a page of a result set of `len` rows.
    pub fn select(&mut self, target: usize, len: usize) -> bool {
        let last = total_pages(len, self.page_size).max(1);
        if !(1..=last).contains(&target) {
            return false;
        }
        self.current_page = target;
        true
    }
}
