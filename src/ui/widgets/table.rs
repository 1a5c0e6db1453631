//! Data table widget: draws a rendered table page with header, checkboxes and body

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::table::{RenderedTable, TableBody};
use crate::ui::theme::Theme;

const CHECK_WIDTH: u16 = 4;
const SKELETON: &str = "░░░░░░░░░░";

pub struct DataTable<'a> {
    table: &'a RenderedTable,
    theme: &'a Theme,
    title: String,
    cursor: Option<usize>,
    focused_column: Option<usize>,
    focused: bool,
}

impl<'a> DataTable<'a> {
    pub fn new(table: &'a RenderedTable, theme: &'a Theme) -> Self {
        Self {
            table,
            theme,
            title: String::new(),
            cursor: None,
            focused_column: None,
            focused: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Highlighted row within the current page
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Header column receiving sort requests
    pub fn focused_column(mut self, column: Option<usize>) -> Self {
        self.focused_column = column;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn widths(&self) -> Vec<Constraint> {
        std::iter::once(Constraint::Length(CHECK_WIDTH))
            .chain(self.table.header.iter().map(|h| {
                if h.width == 0 {
                    Constraint::Fill(1)
                } else {
                    Constraint::Length(h.width)
                }
            }))
            .collect()
    }

    fn header_row(&self) -> Row<'static> {
        let base = self.theme.accent().add_modifier(Modifier::BOLD);
        let check = Cell::from(self.table.header_check.glyph()).style(base);

        let cells = self.table.header.iter().enumerate().map(|(i, h)| {
            let mut label = h.label.to_string();
            if let Some(direction) = h.direction {
                label.push(' ');
                label.push_str(direction.arrow());
            }
            let style = if self.focused_column == Some(i) {
                base.add_modifier(Modifier::REVERSED)
            } else if h.sortable {
                base
            } else {
                base.remove_modifier(Modifier::BOLD)
            };
            Cell::from(label).style(style)
        });

        Row::new(std::iter::once(check).chain(cells)).height(1)
    }

    /// Body rows as drawn: skeleton lines, a single placeholder or the page
    pub fn body_rows(&self) -> Vec<Row<'static>> {
        let columns = self.table.header.len();
        match &self.table.body {
            TableBody::Loading { rows } => (0..*rows)
                .map(|_| {
                    let cells = (0..=columns).map(|i| {
                        if i == 0 {
                            Cell::from("")
                        } else {
                            Cell::from(SKELETON)
                        }
                    });
                    Row::new(cells).style(self.theme.skeleton())
                })
                .collect(),
            TableBody::Empty { .. } => vec![Row::new(vec![Cell::from("")])],
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let check = if row.selected { "[x]" } else { "[ ]" };
                    let cells = std::iter::once(Cell::from(check)).chain(
                        row.cells
                            .iter()
                            .map(|c| Cell::from(c.text.clone()).style(self.theme.tone(c.tone))),
                    );
                    let style = if row.selected {
                        self.theme.highlight().remove_modifier(Modifier::BOLD)
                    } else {
                        self.theme.normal()
                    };
                    Row::new(cells).style(style)
                })
                .collect(),
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.theme.border_focused()
        } else {
            self.theme.border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.title), self.theme.accent()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut state = TableState::default();
        if matches!(self.table.body, TableBody::Rows(_)) {
            state.select(self.cursor);
        }

        let table = Table::new(self.body_rows(), self.widths())
            .header(self.header_row())
            .row_highlight_style(self.theme.selected())
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(table, inner, &mut state);

        // The placeholder spans every column, so draw it over the reserved line
        if let TableBody::Empty { message } = &self.table.body {
            if inner.height > 1 {
                let line = Rect::new(inner.x, inner.y + 1, inner.width, 1);
                let placeholder = Paragraph::new(message.as_str())
                    .style(self.theme.dim())
                    .alignment(Alignment::Center);
                frame.render_widget(placeholder, line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellContent, CellValue, Column, Record, RowId, TableView};
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Debug, Clone)]
    struct Crate {
        id: RowId,
        label: String,
    }

    impl Record for Crate {
        fn id(&self) -> RowId {
            self.id
        }

        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "label" => Some(CellValue::text(&self.label)),
                _ => None,
            }
        }
    }

    fn columns() -> Vec<Column<Crate>> {
        vec![
            Column::plain("label", "Label").sortable(),
            Column::custom("tag", "Tag", |c: &Crate| CellContent::plain(format!("#{}", c.id))),
            Column::plain("missing", "Missing"),
        ]
    }

    fn crates(n: u64) -> Vec<Crate> {
        (1..=n)
            .map(|id| Crate {
                id,
                label: format!("crate-{}", id),
            })
            .collect()
    }

    fn draw(table: &RenderedTable) -> String {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| DataTable::new(table, &theme).title("Crates").render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_table_has_one_placeholder_row() {
        let view = TableView::new(columns());
        let rendered = view.render(&[]);
        let theme = Theme::dark();

        assert_eq!(DataTable::new(&rendered, &theme).body_rows().len(), 1);
        assert!(draw(&rendered).contains("No data available"));
    }

    #[test]
    fn loading_table_draws_skeleton() {
        let mut view = TableView::new(columns());
        view.set_loading(true);
        let rendered = view.render(&crates(3));
        let theme = Theme::dark();

        assert_eq!(DataTable::new(&rendered, &theme).body_rows().len(), 5);
        let screen = draw(&rendered);
        assert!(screen.contains('░'));
        assert!(!screen.contains("crate-1"));
    }

    #[test]
    fn rows_show_page_with_checkboxes() {
        let mut view = TableView::new(columns()).with_page_size(4);
        view.toggle(2, true);
        let rendered = view.render(&crates(6));
        let theme = Theme::dark();

        assert_eq!(DataTable::new(&rendered, &theme).body_rows().len(), 4);
        let screen = draw(&rendered);
        assert!(screen.contains("crate-4"));
        assert!(!screen.contains("crate-5"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("[-]"));
    }

    #[test]
    fn sorted_column_shows_arrow() {
        let mut view = TableView::new(columns());
        view.request_sort("label");
        let screen = draw(&view.render(&crates(2)));
        assert!(screen.contains("Label ▲"));
    }
}
