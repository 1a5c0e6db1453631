//! Generic resource page: search, category filter, selection, sorting and paging

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;

use super::{Resource, SummaryCard};
use crate::app::actions::{ActionResult, TableAction};
use crate::app::state::{AppMessage, AppState};
use crate::config::keybinds::KeyBindings;
use crate::config::settings::Settings;
use crate::table::pagination::next_page_size;
use crate::table::{RowId, TableEvent, TableView};
use crate::ui::dialogs::details::{DetailSection, DetailsDialog};
use crate::ui::layout::{SplitLayout, TablePageLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets::card::StatCard;
use crate::ui::widgets::form::SelectInput;
use crate::ui::widgets::pagination::render_pagination;
use crate::ui::widgets::searchbar::SearchBar;
use crate::ui::widgets::table::DataTable;

/// First category option, matching every row
pub const ALL: &str = "all";

/// Free-text and category filter for one row
pub fn matches_filter<R: Resource>(row: &R, needle: Option<&str>, category: Option<&str>) -> bool {
    let text_ok = needle.map_or(true, |needle| {
        row.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    });
    let category_ok = category.map_or(true, |category| row.category() == category);
    text_ok && category_ok
}

pub struct ResourcePage<R: Resource> {
    view: TableView<R>,
    rows: Vec<R>,
    filtered: Vec<R>,
    revision: Option<u64>,

    search: SearchBar,
    category: SelectInput,
    cursor: usize,
    header_focus: usize,
    page_sizes: Vec<usize>,
    default_page_size: usize,
    keys: KeyBindings,

    details: Option<DetailsDialog>,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(settings: &Settings) -> Self {
        let mut view = TableView::new(R::columns())
            .with_page_size(settings.table.default_page_size)
            .with_empty_message(&format!("No {} found", R::TITLE.to_lowercase()));
        view.set_loading(true);

        Self {
            view,
            rows: Vec::new(),
            filtered: Vec::new(),
            revision: None,
            search: SearchBar::new(R::SEARCH_HINT),
            category: SelectInput::new(&format!("{} (f)", R::CATEGORY), vec![ALL.to_string()]),
            cursor: 0,
            header_focus: 0,
            page_sizes: settings.page_sizes(),
            default_page_size: settings.table.default_page_size,
            keys: KeyBindings::default(),
            details: None,
        }
    }

    /// Search text or a dialog is taking the keyboard
    pub fn captures_input(&self) -> bool {
        self.search.active || self.details.is_some()
    }

    pub fn view(&self) -> &TableView<R> {
        &self.view
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn details(&self) -> Option<&DetailsDialog> {
        self.details.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Re-read table settings; a new default page size applies to the open table
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.page_sizes = settings.page_sizes();
        let size = settings.table.default_page_size;
        if size != self.default_page_size {
            self.default_page_size = size;
            let event = self.view.set_page_size(size);
            self.cursor = 0;
            self.emit(event);
        }
    }

    /// Leaving the page: drop selection, sort and paging back to defaults
    pub fn reset_view(&mut self) {
        self.view.reset(self.default_page_size);
        self.cursor = 0;
        self.header_focus = 0;
        self.details = None;
        tracing::debug!("{} view reset", R::TITLE);
    }

    /// Update cached data from state (call before render)
    pub async fn update_cache(&mut self, state: &Arc<AppState>) {
        let dataset = R::dataset(state).read().await;
        if self.revision == Some(dataset.revision()) {
            return;
        }
        self.revision = Some(dataset.revision());
        let loaded = dataset.is_loaded();
        let rows = dataset.rows().to_vec();
        drop(dataset);

        self.load_rows(rows, loaded);
    }

    pub fn load_rows(&mut self, rows: Vec<R>, loaded: bool) {
        self.view.set_loading(!loaded);
        self.rows = rows;
        self.refresh_categories();
        self.apply_filter();
    }

    fn refresh_categories(&mut self) {
        let current = self.category.value().unwrap_or(ALL).to_string();
        let mut options = vec![ALL.to_string()];
        options.extend(R::categories(&self.rows));
        self.category = SelectInput::new(&self.category.label, options).with_value(&current);
    }

    fn apply_filter(&mut self) {
        let needle = self.search.needle();
        let category = self.category.value().filter(|c| *c != ALL).map(str::to_string);

        self.filtered = self
            .rows
            .iter()
            .filter(|row| matches_filter(*row, needle.as_deref(), category.as_deref()))
            .cloned()
            .collect();
        self.view.sync_total(self.filtered.len());
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }

    /// Filter input changed: refilter and go back to the first page
    fn filter_changed(&mut self) {
        self.apply_filter();
        let event = self.view.set_page(1);
        self.cursor = 0;
        self.emit(event);
    }

    fn visible_len(&self) -> usize {
        self.view.visible(&self.filtered).len()
    }

    fn cursor_id(&self) -> Option<RowId> {
        self.view
            .visible(&self.filtered)
            .get(self.cursor)
            .map(|row| row.id())
    }

    fn cursor_row(&self) -> Option<&R> {
        let id = self.cursor_id()?;
        self.filtered.iter().find(|row| row.id() == id)
    }

    pub async fn handle_key(
        &mut self,
        key: KeyEvent,
        state_tx: &mpsc::Sender<AppMessage>,
    ) -> ActionResult {
        // Handle details dialog input
        if let Some(dialog) = &mut self.details {
            if dialog.handle_key(key) {
                self.details = None;
            }
            return ActionResult::Continue;
        }

        // Handle search input mode
        if self.search.active {
            match key.code {
                KeyCode::Esc => {
                    self.search.deactivate();
                    if self.search.clear() {
                        self.filter_changed();
                    }
                }
                KeyCode::Enter => self.search.deactivate(),
                KeyCode::Backspace => {
                    self.search.backspace();
                    self.filter_changed();
                }
                KeyCode::Delete => {
                    self.search.delete();
                    self.filter_changed();
                }
                KeyCode::Left => self.search.move_left(),
                KeyCode::Right => self.search.move_right(),
                KeyCode::Home => self.search.move_home(),
                KeyCode::End => self.search.move_end(),
                KeyCode::Char(c) => {
                    self.search.insert(c);
                    self.filter_changed();
                }
                _ => {}
            }
            return ActionResult::Continue;
        }

        match self.keys.table_action(&key) {
            Some(action) => self.apply_action(action, state_tx).await,
            None => ActionResult::Continue,
        }
    }

    pub async fn apply_action(
        &mut self,
        action: TableAction,
        state_tx: &mpsc::Sender<AppMessage>,
    ) -> ActionResult {
        match action {
            TableAction::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            TableAction::CursorDown => {
                if self.cursor + 1 < self.visible_len() {
                    self.cursor += 1;
                }
            }
            TableAction::CursorTop => self.cursor = 0,
            TableAction::CursorBottom => self.cursor = self.visible_len().saturating_sub(1),

            TableAction::ToggleRow => {
                if let Some(id) = self.cursor_id() {
                    let checked = !self.view.selection.is_selected(id);
                    let event = self.view.toggle(id, checked);
                    return self.emit(event);
                }
            }
            TableAction::ToggleAll => {
                let event = self.view.toggle_all(&self.filtered);
                return self.emit(event);
            }

            TableAction::FocusPrevColumn | TableAction::FocusNextColumn => {
                let n = self.view.columns().len();
                if n > 0 {
                    let step = if action == TableAction::FocusNextColumn { 1 } else { n - 1 };
                    self.header_focus = (self.header_focus + step) % n;
                }
            }
            TableAction::Sort => {
                let Some(column) = self.view.columns().get(self.header_focus) else {
                    return ActionResult::Continue;
                };
                let (key, label) = (column.key, column.label);
                return match self.view.request_sort(key) {
                    Some(event) => self.emit(event),
                    None => ActionResult::Notify(format!("{} cannot be sorted", label)),
                };
            }

            TableAction::PrevPage => {
                let event = self.view.previous_page();
                self.cursor = 0;
                return self.emit(event);
            }
            TableAction::NextPage => {
                let event = self.view.next_page();
                self.cursor = 0;
                return self.emit(event);
            }
            TableAction::GrowPageSize | TableAction::ShrinkPageSize => {
                let forward = action == TableAction::GrowPageSize;
                let size = next_page_size(&self.page_sizes, self.view.pagination.page_size(), forward);
                let event = self.view.set_page_size(size);
                self.cursor = 0;
                return self.emit(event);
            }

            TableAction::OpenSearch => self.search.activate(),
            TableAction::ClearSearch => {
                let cleared = self.search.clear();
                let reset = self.category.selected != 0;
                self.category.selected = 0;
                if cleared || reset {
                    self.filter_changed();
                }
            }
            TableAction::CycleCategory => {
                self.category.next();
                self.filter_changed();
                return ActionResult::Notify(format!(
                    "{}: {}",
                    R::CATEGORY,
                    self.category.value().unwrap_or(ALL)
                ));
            }

            TableAction::Open => {
                if let Some(id) = self.cursor_id() {
                    let event = self.view.row_click(id);
                    return self.emit(event);
                }
            }
            TableAction::Reload => {
                self.view.set_loading(true);
                if let Err(e) = state_tx
                    .send(AppMessage::ReloadRequested { kind: R::KIND })
                    .await
                {
                    tracing::error!("Failed to request reload of {}: {}", R::KIND.name(), e);
                }
                return ActionResult::Notify(format!("Reloading {}…", R::KIND.name()));
            }
            TableAction::Create => {
                tracing::info!("Create {} requested", R::NOUN.to_lowercase());
                return ActionResult::Notify(format!(
                    "Adding a {} is not available yet",
                    R::NOUN.to_lowercase()
                ));
            }
            TableAction::Edit => {
                if let Some(label) = self.cursor_row().map(|row| row.label()) {
                    tracing::info!("Edit {} {} requested", R::NOUN.to_lowercase(), label);
                    return ActionResult::Notify(format!("Editing {} is not available yet", label));
                }
            }
            TableAction::Export => {
                let count = if self.view.selection.is_empty() {
                    self.filtered.len()
                } else {
                    self.view.selection.len()
                };
                tracing::info!("Export of {} {} requested", count, R::KIND.name());
                return ActionResult::Notify(format!(
                    "Export of {} {} is not available yet",
                    count,
                    R::KIND.name()
                ));
            }
        }
        ActionResult::Continue
    }

    fn emit(&mut self, event: TableEvent) -> ActionResult {
        tracing::debug!("{} table event: {:?}", R::KIND.name(), event);
        match event {
            TableEvent::RowClick(id) => {
                self.open_details(id);
                ActionResult::Continue
            }
            TableEvent::SelectionChange(ids) => {
                ActionResult::Notify(format!("{} {} selected", ids.len(), R::KIND.name()))
            }
            TableEvent::PageSizeChange(size) => {
                ActionResult::Notify(format!("{} rows per page", size))
            }
            TableEvent::Sort(_) | TableEvent::PageChange(_) => ActionResult::Continue,
        }
    }

    fn open_details(&mut self, id: RowId) {
        let Some(row) = self.filtered.iter().find(|row| row.id() == id) else {
            return;
        };

        let overview = self
            .view
            .columns()
            .iter()
            .fold(DetailSection::new(R::NOUN), |section, column| {
                section.cell(column.label, column.render(row))
            });
        let mut sections = vec![overview];
        sections.extend(row.detail_sections());

        self.details = Some(DetailsDialog::new(
            format!("{} {}", R::NOUN, row.label()),
            sections,
        ));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let cards = R::summary_cards(&self.rows);
        let layout = TablePageLayout::new(area, !cards.is_empty());

        if let Some(cards_area) = layout.cards {
            render_summary_cards(frame, cards_area, &cards, theme);
        }

        let filter = SplitLayout::new(layout.filter, 70);
        self.search
            .render(frame, filter.left, "Search (/ to edit, Esc to clear)", theme);
        self.category.render(frame, filter.right, theme);

        let rendered = self.view.render(&self.filtered);
        let mut title = format!("{} ({}/{})", R::TITLE, self.filtered.len(), self.rows.len());
        if !self.view.selection.is_empty() {
            title.push_str(&format!(" · {} selected", self.view.selection.len()));
        }
        DataTable::new(&rendered, theme)
            .title(title)
            .cursor(Some(self.cursor))
            .focused_column(Some(self.header_focus))
            .focused(!self.search.active)
            .render(frame, layout.table);

        render_pagination(frame, layout.pagination, &rendered, theme);

        if let Some(dialog) = &self.details {
            dialog.render(frame, theme);
        }
    }
}

fn render_summary_cards(frame: &mut Frame, area: Rect, cards: &[SummaryCard], theme: &Theme) {
    let count = cards.len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        StatCard::new(card.title, card.count.to_string(), theme.badge(card.variant))
            .render(frame, *chunk, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock;
    use crate::models::{Shipment, ShipmentStatus};
    use crate::table::{HeaderCheck, SortState, TableBody};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page() -> (ResourcePage<Shipment>, mpsc::Sender<AppMessage>, mpsc::Receiver<AppMessage>) {
        let mut page = ResourcePage::new(&Settings::default());
        page.load_rows(mock::shipments(), true);
        let (tx, rx) = mpsc::channel(8);
        (page, tx, rx)
    }

    async fn type_text(page: &mut ResourcePage<Shipment>, tx: &mpsc::Sender<AppMessage>, text: &str) {
        page.handle_key(press(KeyCode::Char('/')), tx).await;
        for c in text.chars() {
            page.handle_key(press(KeyCode::Char(c)), tx).await;
        }
        page.handle_key(press(KeyCode::Enter), tx).await;
    }

    #[test]
    fn filter_matches_search_fields_and_category() {
        let shipment = &mock::shipments()[0];
        let needle = shipment.tracking_number.to_lowercase();
        assert!(matches_filter(shipment, Some(&needle), None));
        assert!(matches_filter(shipment, None, Some(shipment.status.as_str())));
        assert!(!matches_filter(shipment, Some("no such shipment"), None));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_empties_table() {
        let (mut page, tx, _rx) = page();
        let origin = page.filtered()[0].origin.to_uppercase();

        type_text(&mut page, &tx, &origin).await;
        assert!(!page.filtered().is_empty());
        assert!(page.filtered().iter().all(|s| matches_filter(s, Some(&origin.to_lowercase()), None)));

        page.handle_key(press(KeyCode::Esc), &tx).await;
        type_text(&mut page, &tx, "zzzz-nothing").await;
        assert!(page.filtered().is_empty());
        assert!(matches!(
            page.view().render(page.filtered()).body,
            TableBody::Empty { .. }
        ));
    }

    #[tokio::test]
    async fn category_cycles_through_statuses() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Char('f')), &tx).await;
        let first = ShipmentStatus::all()[0];
        assert!(page.filtered().iter().all(|s| s.status == first));

        page.handle_key(press(KeyCode::Esc), &tx).await;
        assert_eq!(page.filtered().len(), mock::shipments().len());
    }

    #[tokio::test]
    async fn select_all_covers_filtered_rows() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Char('a')), &tx).await;
        let total = page.filtered().len();
        assert_eq!(page.view().selection.len(), total);
        assert_eq!(page.view().selection.header_check(total), HeaderCheck::Checked);

        page.handle_key(press(KeyCode::Char(' ')), &tx).await;
        assert_eq!(page.view().selection.header_check(total), HeaderCheck::Partial);

        page.handle_key(press(KeyCode::Char('a')), &tx).await;
        assert_eq!(page.view().selection.len(), total);
        page.handle_key(press(KeyCode::Char('a')), &tx).await;
        assert!(page.view().selection.is_empty());
    }

    #[tokio::test]
    async fn page_size_change_returns_to_first_page() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::PageDown), &tx).await;
        assert_eq!(page.view().pagination.current_page(), 2);

        let result = page.handle_key(press(KeyCode::Char('+')), &tx).await;
        assert!(matches!(result, ActionResult::Notify(ref m) if m == "25 rows per page"));
        assert_eq!(page.view().pagination.current_page(), 1);
        assert_eq!(page.view().pagination.page_size(), 25);
    }

    #[tokio::test]
    async fn reset_view_restores_defaults() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Char('a')), &tx).await;
        page.handle_key(press(KeyCode::Char('s')), &tx).await;
        page.handle_key(press(KeyCode::PageDown), &tx).await;
        page.handle_key(press(KeyCode::Down), &tx).await;
        assert!(!page.view().selection.is_empty());
        assert!(page.view().sort.column.is_some());
        assert_eq!(page.view().pagination.current_page(), 2);

        page.reset_view();
        assert!(page.view().selection.is_empty());
        assert_eq!(page.view().sort, SortState::new());
        assert_eq!(page.view().pagination.current_page(), 1);
        assert_eq!(page.view().pagination.page_size(), Settings::default().table.default_page_size);
        assert_eq!(page.view().pagination.total_items(), mock::shipments().len());
        assert_eq!(page.cursor(), 0);
    }

    #[tokio::test]
    async fn reset_view_uses_configured_page_size() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Char('+')), &tx).await;
        assert_eq!(page.view().pagination.page_size(), 25);

        page.reset_view();
        assert_eq!(page.view().pagination.page_size(), 10);
    }

    #[tokio::test]
    async fn new_default_page_size_applies_to_open_table() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::PageDown), &tx).await;

        let mut settings = Settings::default();
        settings.table.default_page_size = 50;
        page.apply_settings(&settings);
        assert_eq!(page.view().pagination.page_size(), 50);
        assert_eq!(page.view().pagination.current_page(), 1);

        // Unrelated settings changes leave a manually chosen size alone
        page.handle_key(press(KeyCode::Char('+')), &tx).await;
        settings.appearance.dark_mode = true;
        page.apply_settings(&settings);
        assert_eq!(page.view().pagination.page_size(), 100);
    }

    #[tokio::test]
    async fn sort_uses_focused_column() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Char('s')), &tx).await;
        let first = page.view().columns()[0].key;
        assert_eq!(page.view().sort.column, Some(first));

        let ordered = page.view().ordered(page.filtered());
        let numbers: Vec<&str> = ordered.iter().map(|s| s.tracking_number.as_str()).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
    }

    #[tokio::test]
    async fn enter_opens_details_for_cursor_row() {
        let (mut page, tx, _rx) = page();
        page.handle_key(press(KeyCode::Down), &tx).await;
        let expected = page.view().visible(page.filtered())[1].tracking_number.clone();

        page.handle_key(press(KeyCode::Enter), &tx).await;
        let dialog = page.details().unwrap();
        assert!(dialog.title().contains(&expected));
        assert!(page.captures_input());

        page.handle_key(press(KeyCode::Esc), &tx).await;
        assert!(page.details().is_none());
    }

    #[tokio::test]
    async fn reload_requests_fresh_data() {
        let (mut page, tx, mut rx) = page();
        page.handle_key(press(KeyCode::Char('r')), &tx).await;
        assert!(page.view().loading());
        match rx.recv().await {
            Some(AppMessage::ReloadRequested { kind }) => assert_eq!(kind, Shipment::KIND),
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
