//! Analytics tab: revenue over a chosen time range and category split

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge},
    Frame,
};

use crate::app::actions::ActionResult;
use crate::data::mock;
use crate::models::{CategoryShare, RevenuePoint, TimeRange, Trend};
use crate::ui::layout::CardsLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::card::StatCard;
use crate::ui::widgets::form::SelectInput;
use crate::utils::{format_count, format_currency};

/// Totals over the selected window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticsSummary {
    pub total_revenue: u64,
    pub total_orders: u64,
    pub average_order_value: f64,
    pub expenses: u64,
}

impl AnalyticsSummary {
    pub fn compute(points: &[RevenuePoint]) -> Self {
        let total_revenue: u64 = points.iter().map(|p| p.revenue).sum();
        let total_orders: u64 = points.iter().map(|p| p.orders).sum();
        let average_order_value = if total_orders == 0 {
            0.0
        } else {
            total_revenue as f64 / total_orders as f64
        };
        Self {
            total_revenue,
            total_orders,
            average_order_value,
            expenses: points.iter().map(|p| p.expenses).sum(),
        }
    }
}

pub struct AnalyticsTab {
    range: SelectInput,
    series: Vec<RevenuePoint>,
    shares: Vec<CategoryShare>,
}

impl Default for AnalyticsTab {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsTab {
    pub fn new() -> Self {
        let labels = TimeRange::all().iter().map(|r| r.label().to_string()).collect();
        Self {
            range: SelectInput::new("Time Range", labels).with_value(TimeRange::Last6Months.label()),
            series: mock::revenue(),
            shares: mock::category_shares(),
        }
    }

    pub fn time_range(&self) -> TimeRange {
        TimeRange::all()
            .get(self.range.selected)
            .copied()
            .unwrap_or(TimeRange::Last6Months)
    }

    /// Revenue points inside the selected range
    pub fn window(&self) -> &[RevenuePoint] {
        self.time_range().window(&self.series)
    }

    pub fn summary(&self) -> AnalyticsSummary {
        AnalyticsSummary::compute(self.window())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ActionResult {
        match key.code {
            KeyCode::Char('f') | KeyCode::Right => self.range.next(),
            KeyCode::Char('F') | KeyCode::Left => self.range.prev(),
            KeyCode::Char('x') => {
                let range = self.time_range();
                tracing::info!("Export requested for analytics report ({})", range.label());
                return ActionResult::Notify(format!(
                    "Export of the {} report is not available yet",
                    range.label().to_lowercase()
                ));
            }
            _ => {}
        }
        ActionResult::Continue
    }

    /// Last-month change of each summary figure
    fn trends(&self) -> [Option<Trend>; 4] {
        let Some(i) = self.series.len().checked_sub(2) else {
            return [None; 4];
        };
        let (prev, cur) = (&self.series[i], &self.series[i + 1]);
        let aov = |p: &RevenuePoint| if p.orders == 0 { 0 } else { p.revenue * 100 / p.orders };
        [
            Trend::between(prev.revenue, cur.revenue),
            Trend::between(prev.orders, cur.orders),
            Trend::between(aov(prev), aov(cur)),
            Trend::between(prev.expenses, cur.expenses),
        ]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(12)])
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(chunks[0]);
        self.range.render(frame, header[0], theme);

        let layout = CardsLayout::new(chunks[1], 4);
        self.render_cards(frame, &layout.cards, theme);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(layout.body);
        self.render_revenue_chart(frame, body[0], theme);
        self.render_categories(frame, body[1], theme);
    }

    fn render_cards(&self, frame: &mut Frame, cards: &[Rect], theme: &Theme) {
        let summary = self.summary();
        let figures = [
            ("Total Revenue", format_currency(summary.total_revenue as f64), theme.success()),
            ("Total Orders", format_count(summary.total_orders), theme.accent()),
            ("Avg. Order Value", format_currency(summary.average_order_value), theme.info()),
            ("Expenses", format_currency(summary.expenses as f64), theme.warning()),
        ];

        for (((title, value, style), trend), area) in figures
            .into_iter()
            .zip(self.trends())
            .zip(cards.iter())
        {
            let card = StatCard::new(title, value, style);
            match trend {
                Some(trend) => card.with_trend(trend).render(frame, *area, theme),
                None => card.render(frame, *area, theme),
            }
        }
    }

    fn render_revenue_chart(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let bars: Vec<Bar> = self
            .window()
            .iter()
            .map(|p| {
                Bar::default()
                    .label(Line::from(p.month.clone()))
                    .value(p.revenue / 1000)
                    .text_value(format!("{}k", p.revenue / 1000))
                    .style(Style::default().fg(theme.accent))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(format!(" Revenue ({}) · f to change range, x to export ", self.time_range().label())),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .value_style(theme.bright());

        frame.render_widget(chart, area);
    }

    fn render_categories(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Sales by Category ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                self.shares
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .chain(std::iter::once(Constraint::Min(0))),
            )
            .split(inner);

        let palette = [theme.accent, theme.success, theme.warning, theme.secondary];
        for (i, (share, row)) in self.shares.iter().zip(rows.iter()).enumerate() {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(palette[i % palette.len()]))
                .percent(share.value.min(100))
                .label(format!("{} {}%", share.name, share.value));
            frame.render_widget(gauge, Rect { height: 1, ..*row });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn range_selects_window_size() {
        let mut tab = AnalyticsTab::new();
        assert_eq!(tab.time_range(), TimeRange::Last6Months);
        assert_eq!(tab.window().len(), 6);

        tab.handle_key(press(KeyCode::Char('f')));
        assert_eq!(tab.time_range(), TimeRange::LastYear);
        assert_eq!(tab.window().len(), 12);

        tab.handle_key(press(KeyCode::Char('f')));
        assert_eq!(tab.time_range(), TimeRange::Last7Days);
        assert_eq!(tab.window().len(), 1);
        assert_eq!(tab.window()[0].month, "Jun");
    }

    #[test]
    fn summary_sums_the_window() {
        let points = mock::revenue();
        let summary = AnalyticsSummary::compute(&points[10..]);
        assert_eq!(summary.total_revenue, 55_000 + 67_000);
        assert_eq!(summary.total_orders, 145 + 170);
        assert_eq!(summary.expenses, 36_000 + 41_000);
        assert!((summary.average_order_value - 122_000.0 / 315.0).abs() < 1e-9);

        assert_eq!(AnalyticsSummary::compute(&[]).average_order_value, 0.0);
    }

    #[test]
    fn export_is_stubbed() {
        let mut tab = AnalyticsTab::new();
        match tab.handle_key(press(KeyCode::Char('x'))) {
            ActionResult::Notify(msg) => assert!(msg.contains("last 6 months")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
