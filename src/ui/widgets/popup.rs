//! Popup/modal dialog widget

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Bordered overlay that clears what is underneath
pub struct Popup<'a> {
    pub title: String,
    pub lines: Vec<Line<'a>>,
    pub style: Style,
    pub border_style: Style,
    pub scroll: u16,
}

impl<'a> Popup<'a> {
    pub fn new(title: &str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title: title.to_string(),
            lines,
            style: Style::default(),
            border_style: Style::default(),
            scroll: 0,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        // Clear background
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(self.border_style)
            .style(self.style);

        let paragraph = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        frame.render_widget(paragraph, area);
    }
}
