//! Input event handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application input events
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Event handler for terminal input
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn next(&self) -> Option<AppEvent> {
        if event::poll(self.tick_rate).ok()? {
            match event::read().ok()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            }
        } else {
            Some(AppEvent::Tick)
        }
    }
}

/// Check if this is a quit key combination
pub fn is_quit(event: &KeyEvent) -> bool {
    matches!(
        (event.code, event.modifiers),
        (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

pub fn is_help(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Char('?') | KeyCode::F(1))
}

/// Check for tab navigation (returns delta)
pub fn tab_delta(event: &KeyEvent) -> Option<i32> {
    match (event.code, event.modifiers) {
        (KeyCode::Tab, KeyModifiers::NONE) => Some(1),
        (KeyCode::BackTab, KeyModifiers::SHIFT) | (KeyCode::BackTab, KeyModifiers::NONE) => Some(-1),
        _ => None,
    }
}

/// Check for tab number keys (1-8)
pub fn tab_number(event: &KeyEvent) -> Option<usize> {
    match event.code {
        KeyCode::Char(c @ '1'..='8') if event.modifiers.is_empty() => {
            c.to_digit(10).map(|d| d as usize - 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_tabs() {
        assert_eq!(tab_number(&press(KeyCode::Char('1'))), Some(0));
        assert_eq!(tab_number(&press(KeyCode::Char('8'))), Some(7));
        assert_eq!(tab_number(&press(KeyCode::Char('9'))), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&press(KeyCode::Char('q'))));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn tab_keys_cycle() {
        assert_eq!(tab_delta(&press(KeyCode::Tab)), Some(1));
        assert_eq!(tab_delta(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(-1));
    }
}
