//! Client-side pagination model

use std::ops::RangeInclusive;

/// Maximum number of page buttons in the page strip
pub const MAX_VISIBLE_PAGES: usize = 5;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// "Showing {from} to {to} of {total}"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

/// Current page, page size and item count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total / size)`, never less than 1
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Clamp `n` into `[1, total_pages]`
    pub fn set_page(&mut self, n: usize) -> usize {
        self.current_page = n.clamp(1, self.total_pages());
        self.current_page
    }

    /// Change the page size; always returns to page 1
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Record the item count and keep the current page in range
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    /// Rows belonging to the current page
    pub fn visible_slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset().min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }

    pub fn summary(&self) -> PageSummary {
        let total = self.total_items;
        PageSummary {
            from: (self.offset() + 1).min(total),
            to: (self.current_page * self.page_size).min(total),
            total,
        }
    }

    /// Up to five page numbers centered on the current page
    pub fn page_window(&self) -> RangeInclusive<usize> {
        let total = self.total_pages();
        let half = MAX_VISIBLE_PAGES / 2;

        let mut start = self.current_page.saturating_sub(half).max(1);
        let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
        if end + 1 - start < MAX_VISIBLE_PAGES {
            start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
        }
        start..=end
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size.max(1))
    }
}

/// Next option after `current` in `options`, wrapping around
pub fn next_page_size(options: &[usize], current: usize, forward: bool) -> usize {
    if options.is_empty() {
        return current;
    }
    let pos = options.iter().position(|&s| s == current);
    let idx = match (pos, forward) {
        (Some(i), true) => (i + 1) % options.len(),
        (Some(i), false) => (i + options.len() - 1) % options.len(),
        (None, _) => 0,
    };
    options[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(total: usize, size: usize) -> Pagination {
        let mut p = Pagination::new(size);
        p.set_total_items(total);
        p
    }

    #[test]
    fn total_pages_is_ceiling_with_minimum_one() {
        for size in 1..=12 {
            for n in 0..=40 {
                let expected = if n == 0 { 1 } else { (n + size - 1) / size };
                assert_eq!(total_pages(n, size), expected, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn set_page_clamps_out_of_range_requests() {
        let mut p = paged(35, 10);
        assert_eq!(p.set_page(0), 1);
        assert_eq!(p.set_page(3), 3);
        assert_eq!(p.set_page(99), 4);

        let mut empty = paged(0, 10);
        assert_eq!(empty.set_page(5), 1);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut p = paged(100, 10);
        p.set_page(7);
        p.set_page_size(25);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 4);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let mut p = paged(3, 0);
        assert_eq!(p.page_size(), 1);
        p.set_page_size(0);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn twelve_rows_over_two_pages() {
        let rows: Vec<u32> = (1..=12).collect();
        let mut p = paged(rows.len(), 10);

        assert_eq!(p.visible_slice(&rows), &rows[0..10]);
        assert_eq!(p.summary(), PageSummary { from: 1, to: 10, total: 12 });

        p.set_page(2);
        assert_eq!(p.visible_slice(&rows), &[11, 12]);
        assert_eq!(p.summary(), PageSummary { from: 11, to: 12, total: 12 });
    }

    #[test]
    fn summary_clamps_to_small_totals() {
        let p = paged(0, 10);
        assert_eq!(p.summary(), PageSummary { from: 0, to: 0, total: 0 });

        let p = paged(3, 10);
        assert_eq!(p.summary(), PageSummary { from: 1, to: 3, total: 3 });
    }

    #[test]
    fn shrinking_total_pulls_page_back() {
        let mut p = paged(50, 10);
        p.set_page(5);
        p.set_total_items(12);
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn page_window_slides_and_clamps() {
        let mut p = paged(200, 10);
        assert_eq!(p.page_window(), 1..=5);
        p.set_page(10);
        assert_eq!(p.page_window(), 8..=12);
        p.set_page(20);
        assert_eq!(p.page_window(), 16..=20);
        p.set_page(19);
        assert_eq!(p.page_window(), 16..=20);

        let small = paged(25, 10);
        assert_eq!(small.page_window(), 1..=3);
    }

    #[test]
    fn prev_next_availability() {
        let mut p = paged(30, 10);
        assert!(!p.has_previous());
        assert!(p.has_next());
        p.set_page(3);
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn page_size_cycling_wraps() {
        let options = [10, 25, 50, 100];
        assert_eq!(next_page_size(&options, 10, true), 25);
        assert_eq!(next_page_size(&options, 100, true), 10);
        assert_eq!(next_page_size(&options, 10, false), 100);
        assert_eq!(next_page_size(&options, 7, true), 10);
    }
}
