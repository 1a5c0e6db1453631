//! Support tab: FAQ, documentation links and the contact form

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc;

use crate::app::actions::ActionResult;
use crate::app::state::AppMessage;
use crate::data::mock;
use crate::models::{DocLink, Faq};
use crate::ui::dialogs::ticket::{TicketDialog, TicketOutcome};
use crate::ui::layout::SplitLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::searchbar::SearchBar;

const CONTACT: &[(&str, &str)] = &[
    ("Email", "support@tracknstock.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Hours", "Monday - Friday, 9:00 AM - 6:00 PM EST"),
];

pub struct SupportTab {
    faqs: Vec<Faq>,
    docs: Vec<DocLink>,
    search: SearchBar,
    cursor: usize,
    /// Index into `faqs` of the open answer
    expanded: Option<usize>,
    ticket: Option<TicketDialog>,
}

impl Default for SupportTab {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportTab {
    pub fn new() -> Self {
        Self {
            faqs: mock::faqs(),
            docs: mock::documentation(),
            search: SearchBar::new("Search help articles..."),
            cursor: 0,
            expanded: None,
            ticket: None,
        }
    }

    pub fn captures_input(&self) -> bool {
        self.search.active || self.ticket.is_some()
    }

    /// FAQ entries matching the search, with their index
    pub fn filtered(&self) -> Vec<(usize, &Faq)> {
        let needle = self.search.needle();
        self.faqs
            .iter()
            .enumerate()
            .filter(|(_, faq)| needle.as_deref().map_or(true, |n| faq.matches(n)))
            .collect()
    }

    fn search_changed(&mut self) {
        self.cursor = 0;
        self.expanded = None;
    }

    pub async fn handle_key(
        &mut self,
        key: KeyEvent,
        state_tx: &mpsc::Sender<AppMessage>,
    ) -> ActionResult {
        if let Some(dialog) = &mut self.ticket {
            return match dialog.handle_key(key) {
                TicketOutcome::Editing => ActionResult::Continue,
                TicketOutcome::Cancelled => {
                    self.ticket = None;
                    ActionResult::Continue
                }
                TicketOutcome::Rejected(reason) => ActionResult::Notify(reason),
                TicketOutcome::Submitted(ticket) => {
                    self.ticket = None;
                    if let Err(e) = state_tx.send(AppMessage::TicketSubmitted { ticket }).await {
                        tracing::error!("Failed to submit support ticket: {}", e);
                        return ActionResult::Notify("Ticket could not be submitted".to_string());
                    }
                    ActionResult::Continue
                }
            };
        }

        if self.search.active {
            match key.code {
                KeyCode::Esc => {
                    self.search.deactivate();
                    self.search.clear();
                    self.search_changed();
                }
                KeyCode::Enter => self.search.deactivate(),
                KeyCode::Backspace => {
                    self.search.backspace();
                    self.search_changed();
                }
                KeyCode::Left => self.search.move_left(),
                KeyCode::Right => self.search.move_right(),
                KeyCode::Char(c) => {
                    self.search.insert(c);
                    self.search_changed();
                }
                _ => {}
            }
            return ActionResult::Continue;
        }

        let visible = self.filtered().len();
        match key.code {
            KeyCode::Char('/') => self.search.activate(),
            KeyCode::Esc => {
                if self.search.clear() {
                    self.search_changed();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < visible {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = self.filtered().get(self.cursor).map(|(i, _)| *i);
                self.expanded = if self.expanded == target { None } else { target };
            }
            KeyCode::Char('t') | KeyCode::Char('c') => self.ticket = Some(TicketDialog::new()),
            _ => {}
        }
        ActionResult::Continue
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let split = SplitLayout::new(area, 60);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(split.left);
        self.search
            .render(frame, left[0], "Search FAQ (/ to edit, Esc to clear)", theme);
        self.render_faqs(frame, left[1], theme);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(6)])
            .split(split.right);
        self.render_docs(frame, right[0], theme);
        self.render_contact(frame, right[1], theme);

        if let Some(dialog) = &self.ticket {
            dialog.render(frame, theme);
        }
    }

    fn render_faqs(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let filtered = self.filtered();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Frequently Asked Questions (Enter expand, t contact support) ");

        if filtered.is_empty() {
            let empty = Paragraph::new("No matching questions").style(theme.dim()).block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(6) as usize;
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|(i, faq)| {
                let open = self.expanded == Some(*i);
                let marker = if open { "▾ " } else { "▸ " };
                let mut lines = vec![Line::from(vec![
                    Span::styled(marker, theme.accent()),
                    Span::styled(faq.question.clone(), theme.bright()),
                ])];
                if open {
                    lines.extend(
                        wrap(&faq.answer, width)
                            .into_iter()
                            .map(|l| Line::from(Span::styled(format!("  {}", l), theme.dim()))),
                    );
                }
                ListItem::new(lines)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.selected().remove_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_docs(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .docs
            .iter()
            .map(|doc| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(doc.title.clone(), theme.accent()),
                        Span::styled(format!("  {}", doc.link), theme.dim()),
                    ]),
                    Line::from(Span::styled(format!("  {}", doc.description), theme.normal())),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Documentation "),
        );
        frame.render_widget(list, area);
    }

    fn render_contact(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines: Vec<Line> = CONTACT
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:6} ", label), theme.dim()),
                    Span::styled(*value, theme.normal()),
                ])
            })
            .collect();

        let contact = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Additional Contact Information "),
        );
        frame.render_widget(contact, area);
    }
}

/// Greedy word wrap for list items, which do not wrap on their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn search_filters_questions_and_answers() {
        let (tx, _rx) = mpsc::channel(4);
        let mut tab = SupportTab::new();
        tab.handle_key(press(KeyCode::Char('/')), &tx).await;
        for c in "REORDER".chars() {
            tab.handle_key(press(KeyCode::Char(c)), &tx).await;
        }
        let hits = tab.filtered();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].1.question.contains("inventory"));
    }

    #[tokio::test]
    async fn enter_expands_and_collapses() {
        let (tx, _rx) = mpsc::channel(4);
        let mut tab = SupportTab::new();
        tab.handle_key(press(KeyCode::Down), &tx).await;
        tab.handle_key(press(KeyCode::Enter), &tx).await;
        assert_eq!(tab.expanded, Some(1));
        tab.handle_key(press(KeyCode::Enter), &tx).await;
        assert_eq!(tab.expanded, None);
    }

    #[tokio::test]
    async fn submitted_ticket_goes_to_state_manager() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut tab = SupportTab::new();
        tab.handle_key(press(KeyCode::Char('t')), &tx).await;
        assert!(tab.captures_input());

        let result = tab.handle_key(press(KeyCode::Enter), &tx).await;
        tab.handle_key(press(KeyCode::Enter), &tx).await;
        assert!(matches!(result, ActionResult::Continue));

        for c in "Help".chars() {
            tab.handle_key(press(KeyCode::Char(c)), &tx).await;
        }
        let rejected = tab.handle_key(press(KeyCode::Enter), &tx).await;
        assert!(matches!(rejected, ActionResult::Notify(ref m) if m == "Subject required"));

        tab.handle_key(press(KeyCode::Tab), &tx).await;
        for c in "Need".chars() {
            tab.handle_key(press(KeyCode::Char(c)), &tx).await;
        }
        tab.handle_key(press(KeyCode::Tab), &tx).await;
        tab.handle_key(press(KeyCode::Enter), &tx).await;

        match rx.recv().await {
            Some(AppMessage::TicketSubmitted { ticket }) => {
                assert_eq!(ticket.subject, "Need");
                assert_eq!(ticket.message, "Help");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(!tab.captures_input());
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "one two three four five six");
    }
}
