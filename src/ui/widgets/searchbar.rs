//! Search bar widget

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Theme;

/// Search bar state
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    pub query: String,
    pub active: bool,
    /// Cursor position in characters
    pub cursor_pos: usize,
    placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            ..Self::default()
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.cursor_pos = self.query.chars().count();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Returns true when the query changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.cursor_pos = 0;
        changed
    }

    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.query.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.query.chars().count() {
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.chars().count();
    }

    /// Lowercased query, None when blank
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
        let border_style = if self.active {
            theme.border_focused()
        } else {
            theme.border()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", title));

        let line = if self.query.is_empty() && !self.active {
            Line::from(Span::styled(self.placeholder.clone(), theme.dim()))
        } else {
            Line::from(Span::styled(self.query.clone(), theme.normal()))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.active {
            frame.set_cursor_position((area.x + 1 + self.cursor_pos as u16, area.y + 1));
        }
    }
}
