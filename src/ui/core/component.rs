use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::ui::theme::Palette;

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
