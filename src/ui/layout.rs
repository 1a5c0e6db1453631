//! Screen layout management

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard application layout areas
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Create layout from terminal area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            content: chunks[1],
            status: chunks[2],
        }
    }
}

/// Resource page: optional cards, filter bar, table, pagination
pub struct TablePageLayout {
    pub cards: Option<Rect>,
    pub filter: Rect,
    pub table: Rect,
    pub pagination: Rect,
}

impl TablePageLayout {
    pub fn new(area: Rect, with_cards: bool) -> Self {
        let cards_height = if with_cards { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(cards_height), // Count cards
                Constraint::Length(3),            // Search + category
                Constraint::Min(5),               // Table
                Constraint::Length(1),            // Pagination
            ])
            .split(area);

        Self {
            cards: with_cards.then_some(chunks[0]),
            filter: chunks[1],
            table: chunks[2],
            pagination: chunks[3],
        }
    }
}

/// Dashboard-style layout: a row of cards above a body
pub struct CardsLayout {
    pub cards: Vec<Rect>,
    pub body: Rect,
}

impl CardsLayout {
    pub fn new(area: Rect, card_count: usize) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary cards
                Constraint::Min(8),    // Charts and lists
            ])
            .split(area);

        let count = card_count.max(1) as u32;
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(main_chunks[0]);

        Self {
            cards: cards.to_vec(),
            body: main_chunks[1],
        }
    }
}

/// Two-panel layout
pub struct SplitLayout {
    pub left: Rect,
    pub right: Rect,
}

impl SplitLayout {
    pub fn new(area: Rect, left_percent: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(left_percent),
                Constraint::Percentage(100 - left_percent),
            ])
            .split(area);

        Self {
            left: chunks[0],
            right: chunks[1],
        }
    }
}

/// Dialog/popup centered layout
pub struct DialogLayout {
    pub dialog: Rect,
}

impl DialogLayout {
    pub fn new(area: Rect, width_percent: u16, height_percent: u16) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - height_percent) / 2),
                Constraint::Percentage(height_percent),
                Constraint::Percentage((100 - height_percent) / 2),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - width_percent) / 2),
                Constraint::Percentage(width_percent),
                Constraint::Percentage((100 - width_percent) / 2),
            ])
            .split(vertical[1]);

        Self {
            dialog: horizontal[1],
        }
    }

    /// Create centered dialog with fixed dimensions
    pub fn centered(area: Rect, width: u16, height: u16) -> Self {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Self {
            dialog: Rect::new(x, y, width.min(area.width), height.min(area.height)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_page_without_cards_gives_no_card_area() {
        let layout = TablePageLayout::new(Rect::new(0, 0, 80, 30), false);
        assert!(layout.cards.is_none());
        assert_eq!(layout.filter.height, 3);
        assert_eq!(layout.pagination.height, 1);
    }

    #[test]
    fn centered_dialog_is_clamped() {
        let dialog = DialogLayout::centered(Rect::new(0, 0, 40, 10), 60, 20).dialog;
        assert_eq!(dialog, Rect::new(0, 0, 40, 10));
    }
}
