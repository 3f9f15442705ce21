use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tasks::CompletedTask;
use crate::ui::core::{Action, Component};
use crate::ui::theme::Palette;
use crate::utils::datetime::{format_completed_at, COMPLETED_TIME_FORMAT};

/// Collapsible list of completed tasks, hidden entirely when empty
pub struct CompletedListComponent {
    completed: Vec<CompletedTask>,
    expanded: bool,
    time_format: String,
}

impl Default for CompletedListComponent {
    fn default() -> Self {
        Self::new(false, COMPLETED_TIME_FORMAT)
    }
}

impl CompletedListComponent {
    pub fn new(expanded: bool, time_format: &str) -> Self {
        Self {
            completed: Vec::new(),
            expanded,
            time_format: time_format.to_string(),
        }
    }

    pub fn update_data(&mut self, completed: Vec<CompletedTask>) {
        self.completed = completed;
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_visible(&self) -> bool {
        !self.completed.is_empty()
    }

    pub fn toggle_label(&self) -> String {
        let n = self.completed.len();
        if self.expanded {
            format!("Hide completed ({n}) ▲")
        } else {
            format!("Show completed ({n}) ▼")
        }
    }

    /// Rows wanted by this section: nothing when empty, the toggle line when
    /// collapsed, the toggle plus one row per task and a border when expanded.
    pub fn height(&self) -> u16 {
        if !self.is_visible() {
            0
        } else if self.expanded {
            (self.completed.len() as u16).saturating_add(2)
        } else {
            1
        }
    }

    fn completed_line(&self, task: &CompletedTask, palette: &Palette) -> Line<'static> {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(palette.muted)),
            Span::styled(
                task.text.clone(),
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::styled(
                format!("  {}", format_completed_at(&task.completed_at, &self.time_format)),
                Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
            ),
        ])
    }
}

impl Component for CompletedListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') => Action::ToggleCompleted,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        if !self.is_visible() || rect.height == 0 {
            return;
        }

        let toggle = Line::from(Span::styled(
            self.toggle_label(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));

        if !self.expanded {
            f.render_widget(Paragraph::new(toggle), rect);
            return;
        }

        let mut lines = vec![toggle];
        // Newest first
        lines.extend(self.completed.iter().rev().map(|task| self.completed_line(task, palette)));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.muted)),
        );
        f.render_widget(paragraph, rect);
    }
}
