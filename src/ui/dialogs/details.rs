//! Read-only record details dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
    Frame,
};

use crate::table::{CellContent, Tone};
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::popup::Popup;

/// Titled group of label/value pairs
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: String,
    pub fields: Vec<(String, CellContent)>,
}

impl DetailSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((label.into(), CellContent::plain(value)));
        self
    }

    pub fn cell(mut self, label: impl Into<String>, value: CellContent) -> Self {
        self.fields.push((label.into(), value));
        self
    }
}

pub struct DetailsDialog {
    title: String,
    sections: Vec<DetailSection>,
    scroll: u16,
}

impl DetailsDialog {
    pub fn new(title: String, sections: Vec<DetailSection>) -> Self {
        Self {
            title,
            sections,
            scroll: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[DetailSection] {
        &self.sections
    }

    /// Returns true when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        false
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let label_width = self
            .sections
            .iter()
            .flat_map(|s| s.fields.iter().map(|(label, _)| label.chars().count()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push(Line::from(Span::styled(
                section.title.to_uppercase(),
                theme.accent().add_modifier(Modifier::BOLD),
            )));
            for (label, value) in &section.fields {
                let style = match value.tone {
                    Tone::Plain => theme.normal(),
                    tone => theme.tone(tone),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:width$}  ", label, width = label_width), theme.dim()),
                    Span::styled(value.text.clone(), style),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled("↑↓ scroll  Esc/Enter close", theme.dim())));
        lines
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = DialogLayout::new(frame.area(), 70, 80).dialog;
        Popup::new(&self.title, self.lines(theme))
            .with_style(theme.normal())
            .with_border_style(theme.border_focused())
            .with_scroll(self.scroll)
            .render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn escape_closes_and_arrows_scroll() {
        let mut dialog = DetailsDialog::new(
            "Order ORD-1001".to_string(),
            vec![DetailSection::new("Order").field("Customer", "Jane Doe")],
        );
        assert!(!dialog.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)));
        assert_eq!(dialog.scroll, 1);
        assert!(dialog.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn lines_include_every_field() {
        let dialog = DetailsDialog::new(
            "Shipment".to_string(),
            vec![DetailSection::new("Shipment")
                .field("Origin", "Boston")
                .field("Destination", "Denver")],
        );
        let text: Vec<String> = dialog
            .lines(&Theme::dark())
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.contains("Origin") && l.contains("Boston")));
        assert!(text.iter().any(|l| l.contains("Destination") && l.contains("Denver")));
    }
}
