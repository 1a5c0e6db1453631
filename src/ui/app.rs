//! Main TUI application

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::{broadcast, mpsc};

use crate::app::actions::ActionResult;
use crate::app::events::{is_help, is_quit, tab_delta, tab_number, AppEvent, EventHandler};
use crate::app::state::{AppMessage, AppState, UiUpdateSignal};
use crate::config::settings::Settings;
use crate::data::ResourceKind;
use crate::ui::layout::{AppLayout, DialogLayout};
use crate::ui::tabs::{
    analytics::AnalyticsTab, dashboard::DashboardTab, inventory::InventoryTab, orders::OrdersTab,
    settings::SettingsTab, shipments::ShipmentsTab, support::SupportTab, users::UsersTab,
};
use crate::ui::theme::Theme;
use crate::ui::widgets::popup::Popup;
use crate::ui::widgets::statusbar::{build_status_line, StatusItem, Toast};

/// Tab identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Dashboard = 0,
    Shipments = 1,
    Inventory = 2,
    Orders = 3,
    Analytics = 4,
    Users = 5,
    Settings = 6,
    Support = 7,
}

impl TabId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Shipments => "Shipments",
            Self::Inventory => "Inventory",
            Self::Orders => "Orders",
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Settings => "Settings",
            Self::Support => "Support",
        }
    }

    pub fn all() -> &'static [TabId] {
        &[
            Self::Dashboard,
            Self::Shipments,
            Self::Inventory,
            Self::Orders,
            Self::Analytics,
            Self::Users,
            Self::Settings,
            Self::Support,
        ]
    }
}

/// Table-backed pages. Selection, sort and paging last only while a page is shown.
pub struct ResourcePages {
    pub shipments: ShipmentsTab,
    pub inventory: InventoryTab,
    pub orders: OrdersTab,
    pub users: UsersTab,
}

impl ResourcePages {
    pub fn new(settings: &Settings) -> Self {
        Self {
            shipments: ShipmentsTab::new(settings),
            inventory: InventoryTab::new(settings),
            orders: OrdersTab::new(settings),
            users: UsersTab::new(settings),
        }
    }

    /// Reset the table state of the page being navigated away from
    pub fn leave(&mut self, tab: TabId) {
        match tab {
            TabId::Shipments => self.shipments.reset_view(),
            TabId::Inventory => self.inventory.reset_view(),
            TabId::Orders => self.orders.reset_view(),
            TabId::Users => self.users.reset_view(),
            TabId::Dashboard | TabId::Analytics | TabId::Settings | TabId::Support => {}
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.shipments.apply_settings(settings);
        self.inventory.apply_settings(settings);
        self.orders.apply_settings(settings);
        self.users.apply_settings(settings);
    }
}

/// Resolve a tab navigation key to the tab to show, resetting the page left behind
fn navigate(current: usize, key: &KeyEvent, pages: &mut ResourcePages) -> Option<usize> {
    let tabs = TabId::all();
    let next = match tab_number(key) {
        Some(tab) if tab < tabs.len() => tab,
        Some(_) => return Some(current),
        None => {
            let delta = tab_delta(key)?;
            (current as i32 + delta).rem_euclid(tabs.len() as i32) as usize
        }
    };

    if next != current {
        pages.leave(tabs[current]);
    }
    Some(next)
}

/// Main TUI application
pub struct TuiApp {
    state: Arc<AppState>,
    state_tx: mpsc::Sender<AppMessage>,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
    ui_update_rx: broadcast::Receiver<UiUpdateSignal>,

    // Settings
    settings: Settings,
    config_path: Option<PathBuf>,

    // UI state
    current_tab: usize,
    theme: Theme,
    show_help: bool,
    toast: Option<Toast>,

    // Tabs
    dashboard_tab: DashboardTab,
    pages: ResourcePages,
    analytics_tab: AnalyticsTab,
    settings_tab: SettingsTab,
    support_tab: SupportTab,
}

impl TuiApp {
    pub fn new(
        state: Arc<AppState>,
        state_tx: mpsc::Sender<AppMessage>,
        settings: Settings,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let ui_update_rx = state.ui_update_tx.subscribe();

        Ok(Self {
            state,
            state_tx,
            terminal,
            event_handler: EventHandler::new(Duration::from_millis(100)),
            ui_update_rx,

            current_tab: 0,
            theme: Theme::from_dark_mode(settings.appearance.dark_mode),
            show_help: false,
            toast: None,

            dashboard_tab: DashboardTab::new(),
            pages: ResourcePages::new(&settings),
            analytics_tab: AnalyticsTab::new(),
            settings_tab: SettingsTab::new(&settings),
            support_tab: SupportTab::new(),

            settings,
            config_path,
        })
    }

    fn current(&self) -> TabId {
        TabId::all()[self.current_tab]
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("TUI started");

        loop {
            // Check for UI update signals
            while let Ok(signal) = self.ui_update_rx.try_recv() {
                match signal {
                    UiUpdateSignal::TicketSubmitted { reference } => {
                        self.notify(format!("Ticket #{} submitted", reference));
                    }
                    UiUpdateSignal::DatasetUpdated(_) => {}
                }
            }

            if self.toast.as_ref().is_some_and(|t| t.expired(Instant::now())) {
                self.toast = None;
            }

            // Update tab caches before drawing
            self.update_tab_caches().await;

            // Draw UI
            self.draw()?;

            // Handle input events
            if let Some(event) = self.event_handler.next() {
                match event {
                    AppEvent::Key(key) => {
                        if self.show_help {
                            self.show_help = false;
                            continue;
                        }

                        // A page editing text or showing a dialog gets every key
                        if !self.captures_input() {
                            if is_quit(&key) {
                                break;
                            }

                            if is_help(&key) {
                                self.show_help = true;
                                continue;
                            }

                            if let Some(tab) = navigate(self.current_tab, &key, &mut self.pages) {
                                self.current_tab = tab;
                                continue;
                            }
                        }

                        let result = self.dispatch_key(key).await;
                        self.handle_result(result);
                    }
                    AppEvent::Resize(_, _) => {}
                    AppEvent::Tick => {}
                }
            }
        }

        tracing::info!("TUI stopped");
        Ok(())
    }

    fn captures_input(&self) -> bool {
        match self.current() {
            TabId::Shipments => self.pages.shipments.captures_input(),
            TabId::Inventory => self.pages.inventory.captures_input(),
            TabId::Orders => self.pages.orders.captures_input(),
            TabId::Users => self.pages.users.captures_input(),
            TabId::Settings => self.settings_tab.captures_input(),
            TabId::Support => self.support_tab.captures_input(),
            TabId::Dashboard | TabId::Analytics => false,
        }
    }

    async fn dispatch_key(&mut self, key: KeyEvent) -> ActionResult {
        let tx = &self.state_tx;
        match TabId::all()[self.current_tab] {
            TabId::Dashboard => ActionResult::Continue,
            TabId::Shipments => self.pages.shipments.handle_key(key, tx).await,
            TabId::Inventory => self.pages.inventory.handle_key(key, tx).await,
            TabId::Orders => self.pages.orders.handle_key(key, tx).await,
            TabId::Analytics => self.analytics_tab.handle_key(key),
            TabId::Users => self.pages.users.handle_key(key, tx).await,
            TabId::Settings => self.settings_tab.handle_key(key),
            TabId::Support => self.support_tab.handle_key(key, tx).await,
        }
    }

    fn handle_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Continue => {}
            ActionResult::Notify(message) => self.notify(message),
            ActionResult::ApplySettings { settings, save } => self.apply_settings(*settings, save),
        }
    }

    fn apply_settings(&mut self, settings: Settings, save: bool) {
        if settings.appearance.dark_mode != self.theme.dark {
            self.theme = Theme::from_dark_mode(settings.appearance.dark_mode);
            tracing::debug!("Switched to {} theme", self.theme.name());
        }

        self.pages.apply_settings(&settings);

        self.settings = settings;

        if save {
            match self.settings.save(self.config_path.as_deref()) {
                Ok(path) => {
                    tracing::info!("Settings saved to {}", path.display());
                    self.notify("Settings saved");
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {}", e);
                    self.notify(format!("Settings not saved: {}", e));
                }
            }
        }
    }

    async fn update_tab_caches(&mut self) {
        match self.current() {
            TabId::Dashboard => self.dashboard_tab.update_cache(&self.state).await,
            TabId::Shipments => self.pages.shipments.update_cache(&self.state).await,
            TabId::Inventory => self.pages.inventory.update_cache(&self.state).await,
            TabId::Orders => self.pages.orders.update_cache(&self.state).await,
            TabId::Users => self.pages.users.update_cache(&self.state).await,
            TabId::Analytics | TabId::Settings | TabId::Support => {}
        }
    }

    fn status_items(&self) -> Vec<StatusItem> {
        let mut items: Vec<StatusItem> = [
            (ResourceKind::Shipments, "Shipments"),
            (ResourceKind::Orders, "Orders"),
            (ResourceKind::Inventory, "Items"),
            (ResourceKind::Users, "Users"),
        ]
        .into_iter()
        .map(|(kind, label)| {
            let count = self
                .state
                .try_count(kind)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "…".to_string());
            StatusItem::new(label, &count).with_style(self.theme.normal())
        })
        .collect();

        items.push(StatusItem::new("Theme", self.theme.name()).with_style(self.theme.accent()));
        match &self.toast {
            Some(toast) => {
                items.push(StatusItem::new("", &toast.message).with_style(self.theme.warning()))
            }
            None => items.push(StatusItem::new("", "?=help q=quit").with_style(self.theme.dim())),
        }
        items
    }

    fn draw(&mut self) -> Result<()> {
        let theme = &self.theme;
        let current_tab = self.current_tab;
        let show_help = self.show_help;
        let status_line = build_status_line(self.status_items(), "│");

        self.terminal.draw(|frame| {
            let layout = AppLayout::new(frame.area());

            // Tab bar
            let tab_titles: Vec<Line> = TabId::all()
                .iter()
                .enumerate()
                .map(|(i, tab)| {
                    let style = if i == current_tab {
                        theme.tab_active()
                    } else {
                        theme.tab_inactive()
                    };
                    Line::from(Span::styled(format!(" {} {} ", i + 1, tab.title()), style))
                })
                .collect();

            let tabs = Tabs::new(tab_titles)
                .select(current_tab)
                .highlight_style(theme.tab_active())
                .divider("|");

            frame.render_widget(tabs, layout.tabs);

            // Content
            let content_block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.normal())
                .title(format!(" {} ", TabId::all()[current_tab].title()));

            let inner = content_block.inner(layout.content);
            frame.render_widget(content_block, layout.content);

            match TabId::all()[current_tab] {
                TabId::Dashboard => self.dashboard_tab.render(frame, inner, theme),
                TabId::Shipments => self.pages.shipments.render(frame, inner, theme),
                TabId::Inventory => self.pages.inventory.render(frame, inner, theme),
                TabId::Orders => self.pages.orders.render(frame, inner, theme),
                TabId::Analytics => self.analytics_tab.render(frame, inner, theme),
                TabId::Users => self.pages.users.render(frame, inner, theme),
                TabId::Settings => self.settings_tab.render(frame, inner, theme),
                TabId::Support => self.support_tab.render(frame, inner, theme),
            }

            // Status bar
            frame.render_widget(Paragraph::new(status_line), layout.status);

            // Help overlay
            if show_help {
                render_help(frame, theme);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

const HELP_TEXT: &[&str] = &[
    "",
    "  Navigation:",
    "    1-8, Tab       Switch pages",
    "    ↑/↓, j/k       Move cursor",
    "    Home/End       First/last row",
    "    PgUp/PgDn, p/n Previous/next page",
    "    +/-            Rows per page",
    "",
    "  Tables:",
    "    Space          Select row",
    "    a              Select all",
    "    [/]            Focus column",
    "    s              Sort focused column",
    "    /              Search, Esc clears",
    "    f              Cycle filter",
    "    Enter          Details",
    "    r              Reload",
    "    c / e / x      New / edit / export",
    "",
    "  Settings: s saves   Support: t contact us",
    "",
    "  Press any key to close",
];

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = DialogLayout::centered(frame.area(), 56, HELP_TEXT.len() as u16 + 2).dialog;
    let lines: Vec<Line> = HELP_TEXT.iter().map(|l| Line::from(*l)).collect();

    Popup::new("TrackNStock - Keyboard Shortcuts", lines)
        .with_style(theme.normal())
        .with_border_style(theme.border_focused())
        .render(frame, area);
}
