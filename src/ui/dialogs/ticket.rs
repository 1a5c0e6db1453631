//! Contact support dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::SupportTicket;
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::form::TextInput;

/// What a key press did to the ticket form
#[derive(Debug, Clone, PartialEq)]
pub enum TicketOutcome {
    Editing,
    Cancelled,
    /// Required fields left blank
    Rejected(String),
    Submitted(SupportTicket),
}

pub struct TicketDialog {
    subject: TextInput,
    message: TextInput,
    focus_message: bool,
}

impl Default for TicketDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketDialog {
    pub fn new() -> Self {
        let mut subject = TextInput::new("Subject").required();
        subject.focused = true;
        Self {
            subject,
            message: TextInput::new("Message").required().multiline(),
            focus_message: false,
        }
    }

    fn set_focus(&mut self, message: bool) {
        self.focus_message = message;
        self.subject.focused = !message;
        self.message.focused = message;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        if self.focus_message {
            &mut self.message
        } else {
            &mut self.subject
        }
    }

    fn missing_fields(&self) -> Vec<&str> {
        [&self.subject, &self.message]
            .into_iter()
            .filter(|input| input.is_missing())
            .map(|input| input.label.as_str())
            .collect()
    }

    pub fn submit(&self) -> TicketOutcome {
        let missing = self.missing_fields();
        if missing.is_empty() {
            TicketOutcome::Submitted(SupportTicket::new(&self.subject.value, &self.message.value))
        } else {
            TicketOutcome::Rejected(format!("{} required", missing.join(" and ")))
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> TicketOutcome {
        match key.code {
            KeyCode::Esc => return TicketOutcome::Cancelled,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                let message = !self.focus_message;
                self.set_focus(message);
            }
            KeyCode::Enter => {
                if self.focus_message {
                    return self.submit();
                }
                self.set_focus(true);
            }
            KeyCode::Backspace => self.focused_input().backspace(),
            KeyCode::Char(c) => self.focused_input().insert(c),
            _ => {}
        }
        TicketOutcome::Editing
    }

    pub fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = DialogLayout::centered(frame.area(), 64, 16).dialog;
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Contact Support ")
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .style(theme.normal());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Subject
                Constraint::Min(4),    // Message
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        self.subject.render(frame, chunks[0], theme);
        self.message.render(frame, chunks[1], theme);

        let hint = Line::from(vec![
            Span::styled("* required  ", theme.warning()),
            Span::styled("Tab switch field  Enter submit  Esc cancel", theme.dim()),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(dialog: &mut TicketDialog, text: &str) {
        for c in text.chars() {
            dialog.handle_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        let dialog = TicketDialog::new();
        assert_eq!(
            dialog.submit(),
            TicketOutcome::Rejected("Subject and Message required".to_string())
        );
    }

    #[test]
    fn whitespace_message_is_rejected() {
        let mut dialog = TicketDialog::new();
        type_text(&mut dialog, "Damaged box");
        dialog.handle_key(press(KeyCode::Enter));
        type_text(&mut dialog, "   ");
        assert_eq!(
            dialog.handle_key(press(KeyCode::Enter)),
            TicketOutcome::Rejected("Message required".to_string())
        );
    }

    #[test]
    fn complete_form_submits_ticket() {
        let mut dialog = TicketDialog::new();
        type_text(&mut dialog, "Late parcel");
        dialog.handle_key(press(KeyCode::Tab));
        type_text(&mut dialog, "TRK-1004 has not moved");

        match dialog.handle_key(press(KeyCode::Enter)) {
            TicketOutcome::Submitted(ticket) => {
                assert_eq!(ticket.subject, "Late parcel");
                assert_eq!(ticket.message, "TRK-1004 has not moved");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn escape_cancels() {
        let mut dialog = TicketDialog::new();
        assert_eq!(dialog.handle_key(press(KeyCode::Esc)), TicketOutcome::Cancelled);
    }
}
