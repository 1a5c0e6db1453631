//! Generic data-table engine: selection, sorting and pagination

pub mod cell;
pub mod column;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod view;

pub use cell::{BadgeVariant, CellContent, CellValue, Record, RowId, Tone};
pub use column::Column;
pub use pagination::{PageSummary, Pagination};
pub use selection::{HeaderCheck, Selection};
pub use sort::{SortDirection, SortState};
pub use view::{RenderedRow, RenderedTable, TableBody, TableEvent, TableView};
