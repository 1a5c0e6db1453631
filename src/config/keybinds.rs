//! Keyboard shortcut definitions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::actions::TableAction;

/// Keyboard shortcut configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    // List navigation (arrow keys primary, vi alternative)
    pub up: Vec<KeyBind>,
    pub down: Vec<KeyBind>,
    pub top: Vec<KeyBind>,
    pub bottom: Vec<KeyBind>,

    // Selection
    pub toggle_row: Vec<KeyBind>,
    pub toggle_all: Vec<KeyBind>,

    // Sorting
    pub prev_column: Vec<KeyBind>,
    pub next_column: Vec<KeyBind>,
    pub sort: Vec<KeyBind>,

    // Pagination
    pub prev_page: Vec<KeyBind>,
    pub next_page: Vec<KeyBind>,
    pub grow_page: Vec<KeyBind>,
    pub shrink_page: Vec<KeyBind>,

    // Filtering
    pub filter: Vec<KeyBind>,
    pub clear_filter: Vec<KeyBind>,
    pub category: Vec<KeyBind>,

    // Records
    pub open: Vec<KeyBind>,
    pub reload: Vec<KeyBind>,
    pub create: Vec<KeyBind>,
    pub edit: Vec<KeyBind>,
    pub export: Vec<KeyBind>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::*;
        let none = KeyModifiers::NONE;
        let key = |code| KeyBind::new(code, none);

        Self {
            up: vec![key(Up), key(Char('k'))],
            down: vec![key(Down), key(Char('j'))],
            top: vec![key(Home), key(Char('g'))],
            bottom: vec![key(End), KeyBind::new(Char('G'), KeyModifiers::SHIFT)],

            toggle_row: vec![key(Char(' '))],
            toggle_all: vec![key(Char('a'))],

            prev_column: vec![key(Char('['))],
            next_column: vec![key(Char(']'))],
            sort: vec![key(Char('s'))],

            prev_page: vec![key(PageUp), key(Left), key(Char('p'))],
            next_page: vec![key(PageDown), key(Right), key(Char('n'))],
            grow_page: vec![key(Char('+')), KeyBind::new(Char('+'), KeyModifiers::SHIFT)],
            shrink_page: vec![key(Char('-'))],

            filter: vec![key(Char('/'))],
            clear_filter: vec![key(Esc)],
            category: vec![key(Char('f'))],

            open: vec![key(Enter)],
            reload: vec![key(Char('r'))],
            create: vec![key(Char('c'))],
            edit: vec![key(Char('e'))],
            export: vec![key(Char('x'))],
        }
    }
}

impl KeyBindings {
    /// Map a key press to a table action
    pub fn table_action(&self, event: &KeyEvent) -> Option<TableAction> {
        let table: [(&[KeyBind], TableAction); 21] = [
            (&self.up, TableAction::CursorUp),
            (&self.down, TableAction::CursorDown),
            (&self.top, TableAction::CursorTop),
            (&self.bottom, TableAction::CursorBottom),
            (&self.toggle_row, TableAction::ToggleRow),
            (&self.toggle_all, TableAction::ToggleAll),
            (&self.prev_column, TableAction::FocusPrevColumn),
            (&self.next_column, TableAction::FocusNextColumn),
            (&self.sort, TableAction::Sort),
            (&self.prev_page, TableAction::PrevPage),
            (&self.next_page, TableAction::NextPage),
            (&self.grow_page, TableAction::GrowPageSize),
            (&self.shrink_page, TableAction::ShrinkPageSize),
            (&self.filter, TableAction::OpenSearch),
            (&self.clear_filter, TableAction::ClearSearch),
            (&self.category, TableAction::CycleCategory),
            (&self.open, TableAction::Open),
            (&self.reload, TableAction::Reload),
            (&self.create, TableAction::Create),
            (&self.edit, TableAction::Edit),
            (&self.export, TableAction::Export),
        ];

        table
            .iter()
            .find(|(binds, _)| binds.iter().any(|b| b.matches(event.code, event.modifiers)))
            .map(|(_, action)| *action)
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.code == code && self.modifiers == modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_map_table_keys() {
        let keys = KeyBindings::default();
        assert_eq!(keys.table_action(&press(KeyCode::Char(' '))), Some(TableAction::ToggleRow));
        assert_eq!(keys.table_action(&press(KeyCode::PageDown)), Some(TableAction::NextPage));
        assert_eq!(keys.table_action(&press(KeyCode::Char('s'))), Some(TableAction::Sort));
        assert_eq!(keys.table_action(&press(KeyCode::Enter)), Some(TableAction::Open));
        assert_eq!(
            keys.table_action(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(TableAction::CursorBottom)
        );
    }

    #[test]
    fn unbound_key_maps_to_nothing() {
        let keys = KeyBindings::default();
        assert_eq!(keys.table_action(&press(KeyCode::Char('z'))), None);
        assert_eq!(
            keys.table_action(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }
}
