//! Scrollbar shared by the scrollable task views.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the layout rules for where it goes.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Record the content length, the current position and the viewport height.
    pub fn update_state(&mut self, total_rows: usize, position: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(total_rows)
            .position(position)
            .viewport_content_length(viewport_rows);
    }

    pub fn needs_scrollbar(total_rows: usize, available_rows: usize) -> bool {
        total_rows > available_rows
    }

    /// Split `rect` (including its borders) into a content area and, when the
    /// content overflows, a one-column scrollbar area inside the right border.
    pub fn calculate_areas(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        let available_rows = rect.height.saturating_sub(2) as usize;
        if !Self::needs_scrollbar(total_rows, available_rows) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>, color: Color) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(color))
                .thumb_style(Style::default().fg(color));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
