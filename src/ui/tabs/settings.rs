//! Settings tab: form over the persisted settings

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::actions::ActionResult;
use crate::config::settings::{
    Settings, CURRENCIES, DATE_FORMATS, LANGUAGES, LOG_LEVELS, PASSWORD_EXPIRIES, SESSION_TIMEOUTS,
    TIMEZONES,
};
use crate::ui::layout::DialogLayout;
use crate::ui::theme::Theme;
use crate::ui::widgets::form::{Checkbox, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Select,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CompanyName,
    CompanyEmail,
    CompanyPhone,
    CompanyAddress,
    Currency,
    Timezone,
    DateFormat,
    Language,
    EmailNotifications,
    PushNotifications,
    SmsNotifications,
    TwoFactor,
    SessionTimeout,
    PasswordExpiry,
    DarkMode,
    PageSize,
    LogLevel,
}

const FIELDS: &[Field] = &[
    Field::CompanyName,
    Field::CompanyEmail,
    Field::CompanyPhone,
    Field::CompanyAddress,
    Field::Currency,
    Field::Timezone,
    Field::DateFormat,
    Field::Language,
    Field::EmailNotifications,
    Field::PushNotifications,
    Field::SmsNotifications,
    Field::TwoFactor,
    Field::SessionTimeout,
    Field::PasswordExpiry,
    Field::DarkMode,
    Field::PageSize,
    Field::LogLevel,
];

fn strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Field {
    fn section(self) -> &'static str {
        match self {
            Self::CompanyName | Self::CompanyEmail | Self::CompanyPhone | Self::CompanyAddress => {
                "Company Profile"
            }
            Self::Currency | Self::Timezone | Self::DateFormat | Self::Language => "Localization",
            Self::EmailNotifications | Self::PushNotifications | Self::SmsNotifications => {
                "Notifications"
            }
            Self::TwoFactor | Self::SessionTimeout | Self::PasswordExpiry => "Security",
            Self::DarkMode | Self::PageSize | Self::LogLevel => "Appearance",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company Name",
            Self::CompanyEmail => "Email",
            Self::CompanyPhone => "Phone",
            Self::CompanyAddress => "Address",
            Self::Currency => "Currency",
            Self::Timezone => "Timezone",
            Self::DateFormat => "Date Format",
            Self::Language => "Language",
            Self::EmailNotifications => "Email Notifications",
            Self::PushNotifications => "Push Notifications",
            Self::SmsNotifications => "SMS Notifications",
            Self::TwoFactor => "Two-Factor Authentication",
            Self::SessionTimeout => "Session Timeout (minutes)",
            Self::PasswordExpiry => "Password Expiry (days)",
            Self::DarkMode => "Dark Mode",
            Self::PageSize => "Default Page Size",
            Self::LogLevel => "Log Level",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::CompanyName | Self::CompanyEmail | Self::CompanyPhone | Self::CompanyAddress => {
                FieldKind::Text
            }
            Self::EmailNotifications
            | Self::PushNotifications
            | Self::SmsNotifications
            | Self::TwoFactor
            | Self::DarkMode => FieldKind::Toggle,
            _ => FieldKind::Select,
        }
    }

    fn options(self, settings: &Settings) -> Vec<String> {
        match self {
            Self::Currency => strings(CURRENCIES),
            Self::Timezone => strings(TIMEZONES),
            Self::DateFormat => strings(DATE_FORMATS),
            Self::Language => strings(LANGUAGES),
            Self::SessionTimeout => strings(SESSION_TIMEOUTS),
            Self::PasswordExpiry => strings(PASSWORD_EXPIRIES),
            Self::PageSize => strings(settings.page_sizes().as_slice()),
            Self::LogLevel => strings(LOG_LEVELS),
            _ => Vec::new(),
        }
    }

    fn value(self, s: &Settings) -> String {
        match self {
            Self::CompanyName => s.company.name.clone(),
            Self::CompanyEmail => s.company.email.clone(),
            Self::CompanyPhone => s.company.phone.clone(),
            Self::CompanyAddress => s.company.address.clone(),
            Self::Currency => s.localization.currency.clone(),
            Self::Timezone => s.localization.timezone.clone(),
            Self::DateFormat => s.localization.date_format.clone(),
            Self::Language => s.localization.language.clone(),
            Self::SessionTimeout => s.security.session_timeout.to_string(),
            Self::PasswordExpiry => s.security.password_expiry.to_string(),
            Self::PageSize => s.table.default_page_size.to_string(),
            Self::LogLevel => s.log_level.clone(),
            toggle => (if toggle.checked(s) { "on" } else { "off" }).to_string(),
        }
    }

    fn checked(self, s: &Settings) -> bool {
        match self {
            Self::EmailNotifications => s.notifications.email,
            Self::PushNotifications => s.notifications.push,
            Self::SmsNotifications => s.notifications.sms,
            Self::TwoFactor => s.security.two_factor,
            Self::DarkMode => s.appearance.dark_mode,
            _ => false,
        }
    }

    fn toggle(self, s: &mut Settings) {
        let flag = match self {
            Self::EmailNotifications => &mut s.notifications.email,
            Self::PushNotifications => &mut s.notifications.push,
            Self::SmsNotifications => &mut s.notifications.sms,
            Self::TwoFactor => &mut s.security.two_factor,
            Self::DarkMode => &mut s.appearance.dark_mode,
            _ => return,
        };
        *flag = !*flag;
    }

    /// Store a text or select value; numbers that fail to parse are ignored
    fn set(self, s: &mut Settings, value: String) {
        match self {
            Self::CompanyName => s.company.name = value,
            Self::CompanyEmail => s.company.email = value,
            Self::CompanyPhone => s.company.phone = value,
            Self::CompanyAddress => s.company.address = value,
            Self::Currency => s.localization.currency = value,
            Self::Timezone => s.localization.timezone = value,
            Self::DateFormat => s.localization.date_format = value,
            Self::Language => s.localization.language = value,
            Self::SessionTimeout => {
                if let Ok(n) = value.parse() {
                    s.security.session_timeout = n;
                }
            }
            Self::PasswordExpiry => {
                if let Ok(n) = value.parse() {
                    s.security.password_expiry = n;
                }
            }
            Self::PageSize => {
                if let Ok(n) = value.parse() {
                    s.table.default_page_size = n;
                }
            }
            Self::LogLevel => s.log_level = value,
            _ => {}
        }
    }

    fn cycle(self, s: &mut Settings, forward: bool) {
        let options = self.options(s);
        if options.is_empty() {
            return;
        }
        let current = self.value(s);
        let next = match options.iter().position(|o| *o == current) {
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
            None => 0,
        };
        self.set(s, options[next].clone());
    }

    /// Changes that take effect without saving
    fn applies_live(self) -> bool {
        matches!(self, Self::DarkMode | Self::PageSize)
    }
}

pub struct SettingsTab {
    draft: Settings,
    focus: usize,
    editing: Option<TextInput>,
}

impl SettingsTab {
    pub fn new(settings: &Settings) -> Self {
        Self {
            draft: settings.clone(),
            focus: 0,
            editing: None,
        }
    }

    pub fn captures_input(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    fn focused(&self) -> Field {
        FIELDS[self.focus.min(FIELDS.len() - 1)]
    }

    fn apply(&self, save: bool) -> ActionResult {
        ActionResult::ApplySettings {
            settings: Box::new(self.draft.clone()),
            save,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ActionResult {
        let focused = self.focused();
        if let Some(input) = &mut self.editing {
            match key.code {
                KeyCode::Esc => self.editing = None,
                KeyCode::Enter => {
                    let field = focused;
                    let value = input.value.trim().to_string();
                    if value.is_empty() && field == Field::CompanyName {
                        return ActionResult::Notify("Company name required".to_string());
                    }
                    field.set(&mut self.draft, value);
                    self.editing = None;
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Char(c) => input.insert(c),
                _ => {}
            }
            return ActionResult::Continue;
        }

        let field = self.focused();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.focus + 1 < FIELDS.len() {
                    self.focus += 1;
                }
            }
            KeyCode::Char('s') => return self.apply(true),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Left => {
                match field.kind() {
                    FieldKind::Text => {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                            let mut input =
                                TextInput::new(field.label()).with_value(&field.value(&self.draft));
                            input.focused = true;
                            self.editing = Some(input);
                        }
                        return ActionResult::Continue;
                    }
                    FieldKind::Select => field.cycle(&mut self.draft, key.code != KeyCode::Left),
                    FieldKind::Toggle => field.toggle(&mut self.draft),
                }
                if field.applies_live() {
                    return self.apply(false);
                }
            }
            _ => {}
        }
        ActionResult::Continue
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let mut section = "";
        for (i, field) in FIELDS.iter().enumerate() {
            if field.section() != section {
                section = field.section();
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    section.to_string(),
                    theme.accent().add_modifier(Modifier::BOLD),
                )));
            }

            let focused = i == self.focus;
            if field.kind() == FieldKind::Toggle {
                let mut checkbox = Checkbox::new(field.label(), field.checked(&self.draft));
                checkbox.focused = focused;
                lines.push(checkbox.line(theme));
                continue;
            }

            let style = if focused { theme.selected() } else { theme.normal() };
            let value = match field.kind() {
                FieldKind::Select => format!("‹ {} ›", field.value(&self.draft)),
                _ => field.value(&self.draft),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:27}", field.label()), style),
                Span::styled(value, if focused { style } else { theme.bright() }),
            ]));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // keep the focused line visible
        let visible = area.height.saturating_sub(2) as usize;
        let lines = self.lines(theme);
        let focus_line = FIELDS
            .iter()
            .take(self.focus + 1)
            .fold((0usize, ""), |(n, section), f| {
                let header = if f.section() != section { if n == 0 { 1 } else { 2 } } else { 0 };
                (n + header + 1, f.section())
            })
            .0;
        let scroll = focus_line.saturating_sub(visible) as u16;

        let form = Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Settings (↑↓ move, Enter/Space change, s save) "),
        );
        frame.render_widget(form, area);

        if let Some(input) = &self.editing {
            let dialog = DialogLayout::centered(frame.area(), 60, 3).dialog;
            frame.render_widget(Clear, dialog);
            input.render(frame, dialog, theme);
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

    fn focus(tab: &mut SettingsTab, field: Field) {
        tab.focus = FIELDS.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn text_field_edits_through_input() {
        let mut tab = SettingsTab::new(&Settings::default());
        tab.handle_key(press(KeyCode::Enter));
        assert!(tab.captures_input());

        for _ in 0.."TrackNStock".len() {
            tab.handle_key(press(KeyCode::Backspace));
        }
        for c in "Acme Freight".chars() {
            tab.handle_key(press(KeyCode::Char(c)));
        }
        tab.handle_key(press(KeyCode::Enter));
        assert!(!tab.captures_input());
        assert_eq!(tab.draft().company.name, "Acme Freight");
    }

    #[test]
    fn empty_company_name_is_refused() {
        let mut tab = SettingsTab::new(&Settings::default());
        tab.handle_key(press(KeyCode::Enter));
        for _ in 0.."TrackNStock".len() {
            tab.handle_key(press(KeyCode::Backspace));
        }
        let result = tab.handle_key(press(KeyCode::Enter));
        assert!(matches!(result, ActionResult::Notify(_)));
        assert!(tab.captures_input());
    }

    #[test]
    fn select_cycles_both_ways() {
        let mut tab = SettingsTab::new(&Settings::default());
        focus(&mut tab, Field::SessionTimeout);
        tab.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(tab.draft().security.session_timeout, 60);
        tab.handle_key(press(KeyCode::Left));
        tab.handle_key(press(KeyCode::Left));
        assert_eq!(tab.draft().security.session_timeout, 15);
    }

    #[test]
    fn dark_mode_applies_without_saving() {
        let mut tab = SettingsTab::new(&Settings::default());
        focus(&mut tab, Field::DarkMode);
        match tab.handle_key(press(KeyCode::Enter)) {
            ActionResult::ApplySettings { settings, save } => {
                assert!(settings.appearance.dark_mode);
                assert!(!save);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn toggles_do_not_apply_live() {
        let mut tab = SettingsTab::new(&Settings::default());
        focus(&mut tab, Field::SmsNotifications);
        assert!(matches!(tab.handle_key(press(KeyCode::Enter)), ActionResult::Continue));
        assert!(tab.draft().notifications.sms);
    }

    #[test]
    fn save_key_requests_persist() {
        let mut tab = SettingsTab::new(&Settings::default());
        focus(&mut tab, Field::PageSize);
        match tab.handle_key(press(KeyCode::Right)) {
            ActionResult::ApplySettings { settings, save } => {
                assert_eq!(settings.table.default_page_size, 25);
                assert!(!save);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            tab.handle_key(press(KeyCode::Char('s'))),
            ActionResult::ApplySettings { save: true, .. }
        ));
    }

    #[test]
    fn every_field_is_listed() {
        let tab = SettingsTab::new(&Settings::default());
        let text: String = tab
            .lines(&Theme::light())
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for field in FIELDS {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
    }
}
