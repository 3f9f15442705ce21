//! Single-line task input with a character limit

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::INPUT_PLACEHOLDER;
use crate::tasks::MAX_TASK_TEXT_CHARS;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::theme::Palette;

const CURSOR: &str = "█";

#[derive(Debug, Default)]
pub struct TaskInputComponent {
    buffer: String,
    focused: bool,
}

impl TaskInputComponent {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn submit(&mut self) -> Action {
        if self.buffer.trim().is_empty() {
            return Action::None;
        }
        Action::AddTask(std::mem::take(&mut self.buffer))
    }

    /// Tail of the buffer that fits in `width` columns next to the cursor.
    fn visible_text(&self, width: usize) -> String {
        let count = self.char_count();
        let room = width.saturating_sub(1);
        self.buffer.chars().skip(count.saturating_sub(room)).collect()
    }
}

impl Component for TaskInputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc | KeyCode::Tab => Action::Focus(Focus::TaskList),
            KeyCode::Backspace => {
                self.buffer.pop();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffer.clear();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.char_count() < MAX_TASK_TEXT_CHARS {
                    self.buffer.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let border_color = if self.focused { palette.accent } else { palette.muted };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(format!(" {}/{} ", self.char_count(), MAX_TASK_TEXT_CHARS)).alignment(Alignment::Right))
            .style(Style::default().bg(palette.input_bg));

        let inner_width = rect.width.saturating_sub(2) as usize;
        let mut spans = Vec::new();
        if self.buffer.is_empty() {
            if self.focused {
                spans.push(Span::styled(CURSOR, Style::default().fg(palette.accent)));
            }
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(self.visible_text(inner_width), Style::default().fg(palette.text)));
            if self.focused {
                spans.push(Span::styled(CURSOR, Style::default().fg(palette.accent)));
            }
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
