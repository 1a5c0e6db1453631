//! Dashboard tab: headline figures, monthly volume and recent activity

use std::sync::Arc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem},
    Frame,
};

use crate::app::state::AppState;
use crate::data::mock;
use crate::models::{
    Activity, ActivityKind, InventoryItem, MonthlyVolume, Order, PaymentStatus, RevenuePoint,
    Shipment, Trend,
};
use crate::ui::layout::CardsLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::card::StatCard;
use crate::utils::{format_count, format_currency, truncate};

/// Headline figures derived from the loaded datasets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_shipments: usize,
    pub active_orders: usize,
    pub inventory_items: usize,
    /// Sum of paid order totals
    pub revenue: f64,
}

impl DashboardStats {
    pub fn compute(shipments: &[Shipment], orders: &[Order], inventory: &[InventoryItem]) -> Self {
        Self {
            total_shipments: shipments.len(),
            active_orders: orders.iter().filter(|o| o.is_open()).count(),
            inventory_items: inventory.len(),
            revenue: orders
                .iter()
                .filter(|o| o.payment_status == PaymentStatus::Paid)
                .map(|o| o.total)
                .sum(),
        }
    }
}

/// Month-over-month changes shown under the cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardTrends {
    pub shipments: Option<Trend>,
    pub orders: Option<Trend>,
    pub revenue: Option<Trend>,
}

impl DashboardTrends {
    pub fn compute(volume: &[MonthlyVolume], revenue: &[RevenuePoint]) -> Self {
        let last_two = |n: usize| n.checked_sub(2);
        let (shipments, orders) = match last_two(volume.len()) {
            Some(i) => (
                Trend::between(volume[i].shipments, volume[i + 1].shipments),
                Trend::between(volume[i].orders, volume[i + 1].orders),
            ),
            None => (None, None),
        };
        let revenue = last_two(revenue.len())
            .and_then(|i| Trend::between(revenue[i].revenue, revenue[i + 1].revenue));
        Self {
            shipments,
            orders,
            revenue,
        }
    }
}

pub struct DashboardTab {
    stats: DashboardStats,
    loaded: bool,
    trends: DashboardTrends,
    volume: Vec<MonthlyVolume>,
    activity: Vec<Activity>,
}

impl Default for DashboardTab {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardTab {
    pub fn new() -> Self {
        let volume = mock::monthly_volume();
        let trends = DashboardTrends::compute(&volume, &mock::revenue());
        Self {
            stats: DashboardStats::default(),
            loaded: false,
            trends,
            volume,
            activity: mock::recent_activity(),
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub async fn update_cache(&mut self, state: &Arc<AppState>) {
        let shipments = state.shipments.read().await;
        let orders = state.orders.read().await;
        let inventory = state.inventory.read().await;

        self.loaded = shipments.is_loaded() && orders.is_loaded() && inventory.is_loaded();
        self.stats = DashboardStats::compute(shipments.rows(), orders.rows(), inventory.rows());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let layout = CardsLayout::new(area, 4);
        self.render_cards(frame, &layout.cards, theme);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout.body);

        self.render_volume_chart(frame, body[0], theme);
        self.render_activity(frame, body[1], theme);
    }

    fn render_cards(&self, frame: &mut Frame, cards: &[Rect], theme: &Theme) {
        let figures = [
            ("Total Shipments", format_count(self.stats.total_shipments as u64), theme.accent(), self.trends.shipments),
            ("Active Orders", format_count(self.stats.active_orders as u64), theme.info(), self.trends.orders),
            ("Inventory Items", format_count(self.stats.inventory_items as u64), theme.success(), None),
            ("Revenue", format_currency(self.stats.revenue), theme.warning(), self.trends.revenue),
        ];

        for ((title, value, style, trend), area) in figures.into_iter().zip(cards.iter()) {
            let card = if self.loaded {
                StatCard::new(title, value, style)
            } else {
                StatCard::new(title, "…", theme.skeleton())
            };
            match trend {
                Some(trend) if self.loaded => card.with_trend(trend).render(frame, *area, theme),
                _ => card.render(frame, *area, theme),
            }
        }
    }

    fn render_volume_chart(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let shipments_style = Style::default().fg(theme.accent);
        let orders_style = Style::default().fg(theme.success);

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border())
                    .title(Line::from(vec![
                        Span::raw(" Monthly Volume  "),
                        Span::styled("■ shipments ", shipments_style),
                        Span::styled("■ orders ", orders_style),
                    ])),
            )
            .bar_width(4)
            .bar_gap(1)
            .group_gap(3)
            .value_style(theme.bright());

        for month in &self.volume {
            let bars = [
                Bar::default().value(month.shipments).style(shipments_style),
                Bar::default().value(month.orders).style(orders_style),
            ];
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(month.month.clone()))
                    .bars(&bars),
            );
        }

        frame.render_widget(chart, area);
    }

    fn render_activity(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .activity
            .iter()
            .map(|activity| {
                let (icon, style) = match activity.kind {
                    ActivityKind::Shipment => ("▣", theme.accent()),
                    ActivityKind::Order => ("✓", theme.success()),
                    ActivityKind::Location => ("◉", theme.info()),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{} ", icon), style),
                        Span::styled(activity.title.clone(), theme.bright()),
                        Span::styled(format!("  {}", activity.time), theme.dim()),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", truncate(&activity.description, width.saturating_sub(2))),
                        theme.normal(),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Recent Activity "),
        );
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::broadcast;

    #[test]
    fn stats_count_open_orders_and_paid_revenue() {
        let orders = mock::orders();
        let stats = DashboardStats::compute(&mock::shipments(), &orders, &mock::inventory());

        assert_eq!(stats.total_shipments, mock::shipments().len());
        assert_eq!(stats.inventory_items, mock::inventory().len());
        assert_eq!(stats.active_orders, orders.iter().filter(|o| o.is_open()).count());

        let unpaid: f64 = orders
            .iter()
            .filter(|o| o.payment_status != PaymentStatus::Paid)
            .map(|o| o.total)
            .sum();
        let all: f64 = orders.iter().map(|o| o.total).sum();
        assert!((stats.revenue - (all - unpaid)).abs() < 1e-6);
    }

    #[test]
    fn trends_compare_last_two_months() {
        let trends = DashboardTrends::compute(&mock::monthly_volume(), &mock::revenue());
        // Jun vs May
        assert_eq!(trends.shipments, Trend::between(189, 239));
        assert_eq!(trends.orders, Trend::between(480, 380));
        assert!(trends.revenue.is_some_and(|t| t.is_positive()));

        assert_eq!(DashboardTrends::compute(&[], &[]), DashboardTrends::default());
    }

    #[tokio::test]
    async fn cache_waits_for_every_dataset() {
        let (ui_tx, _ui_rx) = broadcast::channel(4);
        let state = Arc::new(AppState::new(ui_tx, Duration::ZERO));
        let mut tab = DashboardTab::new();

        state.shipments.write().await.replace(mock::shipments());
        tab.update_cache(&state).await;
        assert!(!tab.loaded);
        assert_eq!(tab.stats().total_shipments, mock::shipments().len());

        state.orders.write().await.replace(mock::orders());
        state.inventory.write().await.replace(mock::inventory());
        tab.update_cache(&state).await;
        assert!(tab.loaded);
    }
}
