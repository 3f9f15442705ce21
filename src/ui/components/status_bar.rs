//! Status bar component

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_MESSAGE_MS;
use crate::ui::components::badge::create_key_badge;
use crate::ui::core::Focus;
use crate::ui::theme::Palette;

const ERROR_COLOR: Color = Color::Rgb(248, 113, 113);

struct StatusMessage {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

/// Transient status messages, falling back to key hints for the focused area
#[derive(Default)]
pub struct StatusBar {
    message: Option<StatusMessage>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            shown_at: now,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            shown_at: now,
        });
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// Drop the message once it has been shown long enough. Returns true if
    /// one was dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|m| now.duration_since(m.shown_at) >= Duration::from_millis(STATUS_MESSAGE_MS));
        if expired {
            self.message = None;
        }
        expired
    }

    fn hints(focus: Focus) -> &'static str {
        match focus {
            Focus::Input => "Enter: add • Tab: tasks • ?: help",
            Focus::TaskList => "Space: done • p: priority • c: completed • t: theme • ?: help • q: quit",
        }
    }

    /// Render the status bar
    pub fn render(&self, f: &mut Frame, area: Rect, focus: Focus, palette: &Palette) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(32)]).areas(area);

        let (text, color) = match &self.message {
            Some(m) if m.is_error => (m.text.as_str(), ERROR_COLOR),
            Some(m) => (m.text.as_str(), palette.accent),
            None => (Self::hints(focus), palette.muted),
        };
        f.render_widget(Paragraph::new(text).style(Style::default().fg(color)), left);

        let buttons = Line::from(vec![
            create_key_badge("X", palette.button_fg, palette.button_bg),
            Span::styled(" Clear tasks ", Style::default().fg(palette.text)),
            create_key_badge("C", palette.button_fg, palette.button_bg),
            Span::styled(" Clear completed", Style::default().fg(palette.text)),
        ]);
        f.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), right);
    }
}
