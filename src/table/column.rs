//! Column descriptors

use std::cmp::Ordering;

use super::cell::{CellContent, Record};

/// Custom cell renderer
pub type Renderer<R> = fn(&R) -> CellContent;

/// Custom row comparator
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// Where a column's cell content comes from
pub enum CellSource<R> {
    /// Raw lookup of the column key on the row
    Plain,
    /// Computed from the whole row
    Custom(Renderer<R>),
}

impl<R> Clone for CellSource<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Plain => Self::Plain,
            Self::Custom(f) => Self::Custom(*f),
        }
    }
}

/// Describes how to label, sort and render one field across all rows
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub source: CellSource<R>,
    pub compare: Option<Comparator<R>>,
    /// Preferred width in terminal cells, 0 to share the remaining space
    pub width: u16,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            source: self.source.clone(),
            compare: self.compare,
            width: self.width,
        }
    }
}

impl<R: Record> Column<R> {
    pub fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            source: CellSource::Plain,
            compare: None,
            width: 0,
        }
    }

    pub fn custom(key: &'static str, label: &'static str, render: Renderer<R>) -> Self {
        Self {
            source: CellSource::Custom(render),
            ..Self::plain(key, label)
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn compare_with(mut self, compare: Comparator<R>) -> Self {
        self.compare = Some(compare);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Render this column's cell for a row
    pub fn render(&self, row: &R) -> CellContent {
        match &self.source {
            CellSource::Plain => row
                .field(self.key)
                .map(|v| CellContent::plain(v.to_string()))
                .unwrap_or_else(CellContent::empty),
            CellSource::Custom(render) => render(row),
        }
    }

    /// Order two rows by this column
    pub fn cmp_rows(&self, a: &R, b: &R) -> Ordering {
        if let Some(compare) = self.compare {
            return compare(a, b);
        }
        match (a.field(self.key), b.field(self.key)) {
            (Some(x), Some(y)) => x.natural_cmp(&y),
            (Some(x), None) => x.to_string().as_str().cmp(""),
            (None, Some(y)) => "".cmp(y.to_string().as_str()),
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::cell::{CellValue, RowId, Tone};

    struct Item {
        id: RowId,
        name: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> RowId {
            self.id
        }

        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "name" => Some(self.name.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn missing_field_renders_empty() {
        let col: Column<Item> = Column::plain("nope", "Nope");
        let cell = col.render(&Item { id: 1, name: "a" });
        assert_eq!(cell.text, "");
        assert_eq!(cell.tone, Tone::Plain);
    }

    #[test]
    fn custom_renderer_takes_precedence() {
        let col: Column<Item> = Column::custom("name", "Name", |r| CellContent::alert(r.name.to_uppercase()));
        let cell = col.render(&Item { id: 1, name: "box" });
        assert_eq!(cell, CellContent::alert("BOX"));
    }

    #[test]
    fn custom_comparator_overrides_natural_order() {
        let col: Column<Item> = Column::plain("name", "Name").compare_with(|a, b| b.name.cmp(a.name));
        let a = Item { id: 1, name: "a" };
        let b = Item { id: 2, name: "b" };
        assert_eq!(col.cmp_rows(&a, &b), Ordering::Greater);
    }
}
