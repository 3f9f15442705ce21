use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::constants::{LABEL_PRIORITY_HIGH, LABEL_PRIORITY_LOW, LABEL_PRIORITY_NORMAL};
use crate::tasks::Priority;
use crate::ui::theme::priority_color;

/// Badge label for a priority level
#[must_use]
pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => LABEL_PRIORITY_HIGH,
        Priority::Low => LABEL_PRIORITY_LOW,
        Priority::Normal => LABEL_PRIORITY_NORMAL,
    }
}

/// Create a priority badge, e.g. `( High Priority )` in red
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Span<'static> {
    Span::styled(
        format!("( {} )", priority_label(priority)),
        Style::default()
            .fg(priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a key hint badge, e.g. `X` drawn as a small button
#[must_use]
pub fn create_key_badge(key: &str, fg: Color, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {key} "),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}
