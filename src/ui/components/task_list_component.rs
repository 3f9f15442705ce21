use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::EMPTY_LIST_PLACEHOLDER;
use crate::tasks::{Task, TaskId};
use crate::ui::components::badge::{create_priority_badge, priority_label};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::theme::Palette;

const CHECKBOX: &str = "[ ]";
const CHECKBOX_HOVER: &str = "[✓]";

/// Active task list with a movable selection
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    scrollbar: ScrollbarHelper,
    focused: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            focused: false,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.get(self.selected_index).map(|t| t.id)
    }

    fn next_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.tasks.len() - 1);
            self.update_list_state();
        }
    }

    fn previous_task(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_list_state();
    }

    fn on_selected(&self, action: impl FnOnce(TaskId) -> Action) -> Action {
        self.selected_task_id().map_or(Action::None, action)
    }

    fn create_task_items(&self, width: usize, palette: &Palette) -> Vec<ListItem<'static>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                let selected = self.focused && index == self.selected_index;
                create_task_item(task, selected, width, palette)
            })
            .collect()
    }
}

/// One task: its wrapped text, then the priority badge and checkbox
/// right-aligned on their own row.
fn create_task_item(task: &Task, selected: bool, width: usize, palette: &Palette) -> ListItem<'static> {
    let text_style = if selected {
        palette.selected()
    } else {
        Style::default().fg(palette.text)
    };
    let marker = if selected { "▸ " } else { "  " };
    let text_width = width.saturating_sub(marker.chars().count()).max(1);

    let mut lines: Vec<Line<'static>> = wrap_text(&task.text, text_width)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let prefix = if i == 0 { marker } else { "  " };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(palette.accent)),
                Span::styled(chunk, text_style),
            ])
        })
        .collect();

    let checkbox = if selected { CHECKBOX_HOVER } else { CHECKBOX };
    let controls_width = priority_label(task.priority).chars().count() + 4 + 1 + checkbox.chars().count();
    let padding = width.saturating_sub(controls_width);
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(padding)),
        create_priority_badge(task.priority),
        Span::raw(" "),
        Span::styled(checkbox, Style::default().fg(if selected { palette.accent } else { palette.muted })),
    ]));
    lines.push(Line::raw(""));

    ListItem::new(Text::from(lines))
}

/// Break `text` into rows of at most `width` characters, preferring spaces.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split(' ') {
            let word_len = word.chars().count();
            let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
                continue;
            }
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
            }
            // Words longer than a row are split hard
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            current_len = 0;
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    rows.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
        }
        rows.push(current);
    }

    rows
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_task();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous_task();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            KeyCode::End => {
                self.selected_index = self.tasks.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.on_selected(Action::CompleteTask),
            KeyCode::Char('p') => self.on_selected(Action::CyclePriority),
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => Action::Focus(Focus::Input),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let border_color = if self.focused { palette.accent } else { palette.muted };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Tasks ({}) ", self.tasks.len()))
            .title_style(Style::default().fg(palette.header).add_modifier(Modifier::BOLD));

        if self.tasks.is_empty() {
            let placeholder = Paragraph::new(EMPTY_LIST_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC))
                .block(block);
            f.render_widget(placeholder, rect);
            return;
        }

        let inner_width = rect.width.saturating_sub(3) as usize;
        let items = self.create_task_items(inner_width, palette);
        let total_rows: usize = items.iter().map(ListItem::height).sum();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);

        let list = List::new(items).block(block);
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        self.scrollbar
            .update_state(self.tasks.len(), self.selected_index, rect.height.saturating_sub(2) as usize);
        self.scrollbar.render(f, scrollbar_area, palette.muted);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
