//! Stat card: bordered title, bold value and an optional trend line

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Trend;
use crate::ui::theme::Theme;

pub struct StatCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub value_style: Style,
    pub trend: Option<Trend>,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>, value_style: Style) -> Self {
        Self {
            title,
            value: value.into(),
            value_style,
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from(Span::styled(
            self.value,
            self.value_style.add_modifier(Modifier::BOLD),
        ))];
        if let Some(trend) = self.trend {
            let style = if trend.is_positive() {
                theme.success()
            } else {
                theme.error()
            };
            lines.push(Line::from(vec![
                Span::styled(trend.to_string(), style),
                Span::styled(" vs last month", theme.dim()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
