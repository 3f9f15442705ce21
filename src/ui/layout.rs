//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the centred task column gets
const MAX_CONTENT_WIDTH: u16 = 80;

/// Screen regions of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub input: Rect,
    pub tasks: Rect,
    pub completed: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Centre a column of at most `MAX_CONTENT_WIDTH` and split it into the
    /// header, input, task list, completed section, status line and footer.
    #[must_use]
    pub fn main_layout(area: Rect, completed_height: u16) -> MainAreas {
        let [column] = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(area);

        // Completed section may take at most a third of the screen
        let completed_height = completed_height.min(area.height / 3);

        let [header, input, tasks, completed, status, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(completed_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(column);

        MainAreas {
            header,
            input,
            tasks,
            completed,
            status,
            footer,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
