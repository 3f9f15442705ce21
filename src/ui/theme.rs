//! Colour palettes for the three themes.

use ratatui::style::{Color, Modifier, Style};

use crate::tasks::{Priority, Theme};

/// Colours used by every component for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub header: Color,
    pub text: Color,
    pub accent: Color,
    pub muted: Color,
    pub input_bg: Color,
    pub task_bg: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub particle: Color,
}

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(17, 24, 39),
                header: Color::Rgb(252, 231, 243),
                text: Color::White,
                accent: Color::Rgb(251, 207, 232),
                muted: Color::Rgb(156, 163, 175),
                input_bg: Color::Rgb(17, 24, 39),
                task_bg: Color::Rgb(31, 41, 55),
                button_fg: Color::Rgb(31, 41, 55),
                button_bg: Color::Rgb(252, 231, 243),
                particle: Color::Rgb(244, 114, 182),
            },
            Theme::Light => Self {
                background: Color::Rgb(243, 244, 246),
                header: Color::Rgb(31, 41, 55),
                text: Color::Rgb(31, 41, 55),
                accent: Color::Rgb(75, 85, 99),
                muted: Color::Rgb(107, 114, 128),
                input_bg: Color::White,
                task_bg: Color::Rgb(229, 231, 235),
                button_fg: Color::White,
                button_bg: Color::Rgb(31, 41, 55),
                particle: Color::Rgb(59, 130, 246),
            },
            Theme::Navy => Self {
                background: Color::Rgb(23, 37, 84),
                header: Color::Rgb(219, 234, 254),
                text: Color::White,
                accent: Color::Rgb(191, 219, 254),
                muted: Color::Rgb(147, 197, 253),
                input_bg: Color::Rgb(23, 37, 84),
                task_bg: Color::Rgb(30, 58, 138),
                button_fg: Color::Rgb(17, 24, 39),
                button_bg: Color::Rgb(96, 165, 250),
                particle: Color::Rgb(147, 197, 253),
            },
        }
    }

    /// Base style: theme text on theme background
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style of the currently selected row
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.task_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(&self) -> Style {
        Style::default().fg(self.button_fg).bg(self.button_bg)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Badge colour for a priority level
#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Rgb(248, 113, 113),
        Priority::Low => Color::Rgb(74, 222, 128),
        Priority::Normal => Color::Rgb(250, 204, 21),
    }
}
