//! Single-column sort model

use std::cmp::Ordering;

use super::cell::Record;
use super::column::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<&'static str>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle(&mut self, key: &'static str) {
        if self.column == Some(key) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction for a column if it is the active one
    pub fn direction_of(&self, key: &str) -> Option<SortDirection> {
        match self.column {
            Some(active) if active == key => Some(self.direction),
            _ => None,
        }
    }

    /// Row comparator for a column, honoring the current direction
    pub fn comparator<'a, R: Record>(&self, column: &'a Column<R>) -> impl Fn(&R, &R) -> Ordering + 'a {
        let direction = self.direction;
        move |a, b| {
            let ord = column.cmp_rows(a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        }
    }

    /// Stable sort of `rows` by the active column, input order when none is active
    pub fn apply<'r, R: Record>(&self, columns: &[Column<R>], rows: &'r [R]) -> Vec<&'r R> {
        let mut ordered: Vec<&R> = rows.iter().collect();
        let active = self
            .column
            .and_then(|key| columns.iter().find(|c| c.key == key && c.sortable));
        if let Some(column) = active {
            let cmp = self.comparator(column);
            ordered.sort_by(|a, b| cmp(*a, *b));
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::cell::{CellValue, RowId};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        k: f64,
        idx: RowId,
    }

    impl Record for Row {
        fn id(&self) -> RowId {
            self.idx
        }

        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "k" => Some(CellValue::Number(self.k)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { k: 1.0, idx: 0 },
            Row { k: 1.0, idx: 1 },
            Row { k: 0.0, idx: 2 },
        ]
    }

    fn ids(ordered: &[&Row]) -> Vec<RowId> {
        ordered.iter().map(|r| r.idx).collect()
    }

    #[test]
    fn ascending_sort_is_stable() {
        let columns = vec![Column::plain("k", "K").sortable()];
        let mut sort = SortState::new();
        sort.toggle("k");
        let data = rows();
        assert_eq!(ids(&sort.apply(&columns, &data)), vec![2, 0, 1]);
    }

    #[test]
    fn descending_keeps_equal_rows_in_input_order() {
        let columns = vec![Column::plain("k", "K").sortable()];
        let mut sort = SortState::new();
        sort.toggle("k");
        sort.toggle("k");
        let data = rows();
        assert_eq!(ids(&sort.apply(&columns, &data)), vec![0, 1, 2]);
    }

    #[test]
    fn toggling_twice_returns_to_initial_order() {
        let columns = vec![Column::plain("k", "K").sortable()];
        let data = rows();
        let mut sort = SortState::new();
        sort.toggle("k");
        let first = ids(&sort.apply(&columns, &data));
        sort.toggle("k");
        sort.toggle("k");
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(ids(&sort.apply(&columns, &data)), first);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut sort = SortState::new();
        sort.toggle("a");
        sort.toggle("a");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("b");
        assert_eq!(sort.column, Some("b"));
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn no_active_column_preserves_input_order() {
        let columns = vec![Column::plain("k", "K").sortable()];
        let data = rows();
        assert_eq!(ids(&SortState::new().apply(&columns, &data)), vec![0, 1, 2]);
    }
}
