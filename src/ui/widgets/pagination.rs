//! Pagination bar: "Showing x to y of z", page window, prev/next and page size

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::table::RenderedTable;
use crate::ui::theme::Theme;

pub fn pagination_line(table: &RenderedTable, theme: &Theme) -> Line<'static> {
    let summary = table.summary;
    let nav = |enabled: bool| if enabled { theme.accent() } else { theme.dim() };

    let mut spans = vec![
        Span::styled(
            format!(
                " Showing {} to {} of {} results ",
                summary.from, summary.to, summary.total
            ),
            theme.normal(),
        ),
        Span::raw("  "),
        Span::styled("‹ Prev ", nav(table.has_previous)),
    ];

    for page in table.page_window.clone() {
        if page == table.current_page {
            spans.push(Span::styled(format!("[{}]", page), theme.highlight()));
        } else {
            spans.push(Span::styled(format!(" {} ", page), theme.normal()));
        }
    }

    spans.push(Span::styled(" Next ›", nav(table.has_next)));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("Rows per page: {} (+/-)", table.page_size),
        theme.dim(),
    ));

    Line::from(spans)
}

pub fn render_pagination(frame: &mut Frame, area: Rect, table: &RenderedTable, theme: &Theme) {
    frame.render_widget(Paragraph::new(pagination_line(table, theme)), area);
}
