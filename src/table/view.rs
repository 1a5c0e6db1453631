//! Table view: sort, paginate and render rows through column descriptors

use std::ops::RangeInclusive;

use super::cell::{CellContent, Record, RowId};
use super::column::Column;
use super::pagination::{PageSummary, Pagination};
use super::selection::{HeaderCheck, Selection};
use super::sort::{SortDirection, SortState};

/// Number of placeholder rows shown while loading
pub const SKELETON_ROWS: usize = 5;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Events raised to the owning page controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    Sort(&'static str),
    SelectionChange(Vec<RowId>),
    RowClick(RowId),
    PageChange(usize),
    PageSizeChange(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub direction: Option<SortDirection>,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: RowId,
    pub selected: bool,
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Loading { rows: usize },
    Empty { message: String },
    Rows(Vec<RenderedRow>),
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub header: Vec<HeaderCell>,
    pub header_check: HeaderCheck,
    pub body: TableBody,
    pub summary: PageSummary,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_window: RangeInclusive<usize>,
    pub page_size: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Composes selection, sort and pagination over caller-supplied rows
pub struct TableView<R> {
    columns: Vec<Column<R>>,
    pub selection: Selection,
    pub sort: SortState,
    pub pagination: Pagination,
    loading: bool,
    empty_message: String,
}

impl<R: Record> TableView<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            selection: Selection::new(),
            sort: SortState::new(),
            pagination: Pagination::default(),
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.pagination = Pagination::new(size);
        self
    }

    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Keep pagination in sync with the filtered row count
    pub fn sync_total(&mut self, total: usize) {
        self.pagination.set_total_items(total);
    }

    /// No-op for unknown or non-sortable columns
    pub fn request_sort(&mut self, key: &str) -> Option<TableEvent> {
        let column = self.columns.iter().find(|c| c.key == key && c.sortable)?;
        let key = column.key;
        self.sort.toggle(key);
        Some(TableEvent::Sort(key))
    }

    /// Select every row currently handed to the table
    pub fn select_all(&mut self, rows: &[R]) -> TableEvent {
        self.selection.select_all(rows.iter().map(|r| r.id()));
        TableEvent::SelectionChange(self.selection.ids())
    }

    /// Header checkbox: check all when not all checked, otherwise clear
    pub fn toggle_all(&mut self, rows: &[R]) -> TableEvent {
        if self.selection.all_selected(rows.len()) {
            self.clear_selection()
        } else {
            self.select_all(rows)
        }
    }

    pub fn toggle(&mut self, id: RowId, checked: bool) -> TableEvent {
        self.selection.toggle(id, checked);
        TableEvent::SelectionChange(self.selection.ids())
    }

    pub fn clear_selection(&mut self) -> TableEvent {
        self.selection.clear();
        TableEvent::SelectionChange(Vec::new())
    }

    pub fn set_page(&mut self, n: usize) -> TableEvent {
        TableEvent::PageChange(self.pagination.set_page(n))
    }

    pub fn next_page(&mut self) -> TableEvent {
        let n = self.pagination.current_page() + 1;
        self.set_page(n)
    }

    pub fn previous_page(&mut self) -> TableEvent {
        let n = self.pagination.current_page().saturating_sub(1);
        self.set_page(n)
    }

    pub fn set_page_size(&mut self, size: usize) -> TableEvent {
        self.pagination.set_page_size(size);
        TableEvent::PageSizeChange(self.pagination.page_size())
    }

    /// Back to defaults: nothing selected, unsorted, first page of `page_size` rows
    pub fn reset(&mut self, page_size: usize) {
        self.selection.clear();
        self.sort = SortState::new();
        self.pagination.set_page_size(page_size);
    }

    pub fn row_click(&self, id: RowId) -> TableEvent {
        TableEvent::RowClick(id)
    }

    /// Rows in display order (sorted, not paginated)
    pub fn ordered<'r>(&self, rows: &'r [R]) -> Vec<&'r R> {
        self.sort.apply(&self.columns, rows)
    }

    /// Rows on the current page
    pub fn visible<'r>(&self, rows: &'r [R]) -> Vec<&'r R> {
        let ordered = self.ordered(rows);
        self.paging_for(rows.len()).visible_slice(&ordered).to_vec()
    }

    fn paging_for(&self, total: usize) -> Pagination {
        let mut paging = self.pagination.clone();
        paging.set_total_items(total);
        paging
    }

    pub fn render(&self, rows: &[R]) -> RenderedTable {
        let paging = self.paging_for(rows.len());

        let header = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                key: c.key,
                label: c.label,
                sortable: c.sortable,
                direction: self.sort.direction_of(c.key),
                width: c.width,
            })
            .collect();

        let body = if self.loading {
            TableBody::Loading { rows: SKELETON_ROWS }
        } else if rows.is_empty() {
            TableBody::Empty {
                message: self.empty_message.clone(),
            }
        } else {
            let ordered = self.ordered(rows);
            TableBody::Rows(
                paging
                    .visible_slice(&ordered)
                    .iter()
                    .map(|row| RenderedRow {
                        id: row.id(),
                        selected: self.selection.is_selected(row.id()),
                        cells: self.columns.iter().map(|c| c.render(row)).collect(),
                    })
                    .collect(),
            )
        };

        RenderedTable {
            header,
            header_check: self.selection.header_check(rows.len()),
            body,
            summary: paging.summary(),
            current_page: paging.current_page(),
            total_pages: paging.total_pages(),
            page_window: paging.page_window(),
            page_size: paging.page_size(),
            has_previous: paging.has_previous(),
            has_next: paging.has_next(),
        }
    }
}
