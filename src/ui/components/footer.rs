use std::time::{Duration, Instant};

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{CLOCK_TICK_MS, FOOTER_BRAND};
use crate::tasks::Theme;
use crate::ui::theme::Palette;
use crate::utils::datetime::{format_clock, CLOCK_DATE_FORMAT, CLOCK_TIME_FORMAT};

/// Footer with the live clock, the active theme and the brand
pub struct FooterComponent {
    clock: String,
    last_refresh: Option<Instant>,
    date_format: String,
    time_format: String,
    theme: Theme,
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self::new(CLOCK_DATE_FORMAT, CLOCK_TIME_FORMAT)
    }
}

impl FooterComponent {
    pub fn new(date_format: &str, time_format: &str) -> Self {
        let mut footer = Self {
            clock: String::new(),
            last_refresh: None,
            date_format: date_format.to_string(),
            time_format: time_format.to_string(),
            theme: Theme::default(),
        };
        footer.refresh_clock();
        footer
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn refresh_clock(&mut self) {
        self.clock = format_clock(&Local::now(), &self.date_format, &self.time_format);
    }

    /// Refresh the clock text once per second. Returns true when it changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match self.last_refresh {
            Some(last) => now.duration_since(last) >= Duration::from_millis(CLOCK_TICK_MS),
            None => true,
        };
        if !due {
            return false;
        }
        self.last_refresh = Some(now);
        let previous = std::mem::take(&mut self.clock);
        self.refresh_clock();
        previous != self.clock
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(rect);

        let clock = Paragraph::new(Line::from(vec![
            Span::styled("🕒 ", Style::default().fg(palette.muted)),
            Span::styled(self.clock.clone(), Style::default().fg(palette.text)),
        ]));
        f.render_widget(clock, left);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled(format!("theme: {}  ", self.theme), Style::default().fg(palette.muted)),
            Span::styled(
                FOOTER_BRAND,
                Style::default().fg(palette.header).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(brand, right);
    }
}
