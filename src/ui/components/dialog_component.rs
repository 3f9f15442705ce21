//! Overlay dialogs: the key reference and the in-memory log viewer.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;

const HELP_TEXT: &str = r"
LET'S DO IT
===========

INPUT
-----
type        Edit the new task (up to 300 characters)
Enter       Add the task
Tab / Esc   Move to the task list
Ctrl+U      Clear the input

TASK LIST
---------
j/k ↑/↓     Move the selection
Home/End    Jump to first/last task
Space/Enter Complete the selected task
p           Cycle priority (normal → high → low)
a/i/Tab     Back to the input

LISTS
-----
c           Show/hide completed tasks
X           Clear all active tasks
C           Clear all completed tasks

THEMES
------
1 / 2 / 3   Dark / Light / Navy
t           Next theme

GENERAL
-------
?           Toggle this help
G           Show logs
Esc/q       Quit (Esc closes an open dialog first)
Ctrl+C      Quit from anywhere
";

/// Scrollable modal dialog shown above the main view.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }

    fn content(&self) -> Vec<String> {
        match self.dialog_type {
            Some(DialogType::Help) => HELP_TEXT.lines().map(str::to_string).collect(),
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                if logs.is_empty() {
                    vec!["No logs yet".to_string()]
                } else {
                    logs
                }
            }
            None => Vec::new(),
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let close = match self.dialog_type {
            Some(DialogType::Help) => matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')),
            Some(DialogType::Logs) => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
            None => return Action::None,
        };
        if close {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::Home => self.scroll_offset = 0,
            // Clamped to the last page while rendering
            KeyCode::End => self.scroll_offset = usize::MAX,
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let title = match self.dialog_type {
            Some(DialogType::Help) => DIALOG_TITLE_HELP,
            Some(DialogType::Logs) => DIALOG_TITLE_LOGS,
            None => return,
        };

        let area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let lines = self.content();
        let total_lines = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.scroll_offset);

        let visible = lines
            .iter()
            .skip(self.scroll_offset)
            .take(visible_height)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        let paragraph = Paragraph::new(visible)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.accent))
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .style(palette.base());
        f.render_widget(paragraph, area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(palette.muted))
                .thumb_style(Style::default().fg(palette.accent));
            f.render_stateful_widget(scrollbar, area, &mut self.scrollbar_state);
        }
    }
}
