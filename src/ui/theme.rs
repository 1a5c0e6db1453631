//! Color theme definitions

use ratatui::style::{Color, Modifier, Style};

use crate::table::{BadgeVariant, Tone};

/// Application color theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_bright: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Badge colors not covered by status
    pub primary: Color,
    pub secondary: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub highlight: Color,
    pub skeleton: Color,

    // Tab colors
    pub tab_active: Color,
    pub tab_inactive: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Dark theme variant
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            fg_bright: Color::White,

            accent: Color::Cyan,
            accent_dim: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightBlue,

            primary: Color::Cyan,
            secondary: Color::Gray,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::Blue,
            highlight: Color::Yellow,
            skeleton: Color::DarkGray,

            tab_active: Color::Cyan,
            tab_inactive: Color::DarkGray,
        }
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            dark: false,
            bg: Color::White,
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            fg_bright: Color::Black,
            accent: Color::Blue,
            accent_dim: Color::Gray,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            info: Color::Blue,
            primary: Color::Blue,
            secondary: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,
            selection: Color::LightBlue,
            highlight: Color::Magenta,
            skeleton: Color::Gray,
            tab_active: Color::Blue,
            tab_inactive: Color::Gray,
        }
    }

    pub fn name(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }

    // Style helpers
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn bright(&self) -> Style {
        Style::default().fg(self.fg_bright).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection).fg(self.fg_bright)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
    }

    pub fn skeleton(&self) -> Style {
        Style::default().fg(self.skeleton)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn tab_active(&self) -> Style {
        Style::default().fg(self.tab_active).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.tab_inactive)
    }

    pub fn badge(&self, variant: BadgeVariant) -> Style {
        let color = match variant {
            BadgeVariant::Default => return self.normal(),
            BadgeVariant::Primary => self.primary,
            BadgeVariant::Secondary => self.secondary,
            BadgeVariant::Success => self.success,
            BadgeVariant::Danger => self.error,
            BadgeVariant::Warning => self.warning,
            BadgeVariant::Info => self.info,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Plain => self.normal(),
            Tone::Alert => self.error().add_modifier(Modifier::BOLD),
            Tone::Badge(variant) => self.badge(variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_picks_variant() {
        assert_eq!(Theme::from_dark_mode(true).name(), "dark");
        assert_eq!(Theme::from_dark_mode(false), Theme::light());
    }

    #[test]
    fn badge_variants_are_colored() {
        let theme = Theme::dark();
        assert_eq!(theme.badge(BadgeVariant::Danger).fg, Some(theme.error));
        assert_eq!(theme.badge(BadgeVariant::Default), theme.normal());
        assert_eq!(theme.tone(Tone::Badge(BadgeVariant::Success)).fg, Some(theme.success));
    }
}
