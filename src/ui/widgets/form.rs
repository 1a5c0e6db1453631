//! Form input widgets

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::Theme;

fn field_title(label: &str, required: bool) -> String {
    if required {
        format!(" {} * ", label)
    } else {
        format!(" {} ", label)
    }
}

/// Text input field
#[derive(Debug, Clone)]
pub struct TextInput {
    pub label: String,
    pub value: String,
    pub cursor_pos: usize,
    pub focused: bool,
    pub required: bool,
    pub multiline: bool,
}

impl TextInput {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            cursor_pos: 0,
            focused: false,
            required: false,
            multiline: false,
        }
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.cursor_pos = value.chars().count();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    /// A required field holding only whitespace
    pub fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self
            .value
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        self.value.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            if let Some((idx, _)) = self.value.char_indices().nth(self.cursor_pos) {
                self.value.remove(idx);
            }
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let block = Block::default()
            .title(field_title(&self.label, self.required))
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut paragraph = Paragraph::new(self.value.clone())
            .block(block)
            .style(theme.normal());
        if self.multiline {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }

        frame.render_widget(paragraph, area);

        if self.focused && !self.multiline {
            frame.set_cursor_position((area.x + 1 + self.cursor_pos as u16, area.y + 1));
        }
    }
}

/// Select field cycling through fixed options
#[derive(Debug, Clone)]
pub struct SelectInput {
    pub label: String,
    pub options: Vec<String>,
    pub selected: usize,
    pub focused: bool,
}

impl SelectInput {
    pub fn new(label: &str, options: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            options,
            selected: 0,
            focused: false,
        }
    }

    /// Preselect `value`, keeping the first option when it is unknown
    pub fn with_value(mut self, value: &str) -> Self {
        if let Some(i) = self.options.iter().position(|o| o == value) {
            self.selected = i;
        }
        self
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.options.get(self.selected).map(|s| s.as_str())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };

        let block = Block::default()
            .title(field_title(&self.label, false))
            .borders(Borders::ALL)
            .border_style(border_style);

        let display = self
            .value()
            .map(|s| format!("‹ {} ›", s))
            .unwrap_or_else(|| "No options".to_string());

        frame.render_widget(
            Paragraph::new(display).block(block).style(theme.normal()),
            area,
        );
    }
}

/// Checkbox / toggle field
#[derive(Debug, Clone)]
pub struct Checkbox {
    pub label: String,
    pub checked: bool,
    pub focused: bool,
}

impl Checkbox {
    pub fn new(label: &str, checked: bool) -> Self {
        Self {
            label: label.to_string(),
            checked,
            focused: false,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    pub fn line(&self, theme: &Theme) -> Line<'static> {
        let style = if self.focused {
            theme.selected()
        } else {
            theme.normal()
        };
        let mark = if self.checked { "[x]" } else { "[ ]" };
        Line::from(vec![
            Span::styled(format!(" {} ", mark), style),
            Span::styled(self.label.clone(), style),
        ])
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(Paragraph::new(self.line(theme)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_whitespace() {
        let mut input = TextInput::new("Subject").required();
        assert!(input.is_missing());
        input.insert(' ');
        assert!(input.is_missing());
        input.insert('x');
        assert!(!input.is_missing());
        assert!(!TextInput::new("Optional").is_missing());
    }

    #[test]
    fn select_wraps_both_ways() {
        let options = vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()];
        let mut select = SelectInput::new("Currency", options).with_value("GBP");
        select.next();
        assert_eq!(select.value(), Some("USD"));
        select.prev();
        assert_eq!(select.value(), Some("GBP"));
    }

    #[test]
    fn unknown_value_keeps_first_option() {
        let select = SelectInput::new("Language", vec!["en".to_string()]).with_value("xx");
        assert_eq!(select.value(), Some("en"));
    }
}
