use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{interval, Duration, Instant, Interval, MissedTickBehavior};

use crate::constants::ANIMATION_FRAME_MS;

/// Turns terminal input and the frame timer into [`EventType`]s.
///
/// The frame interval is owned here, so it stops with the event loop.
pub struct EventHandler {
    frame_interval: Interval,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_frame_rate(Duration::from_millis(ANIMATION_FRAME_MS))
    }

    pub fn with_frame_rate(frame: Duration) -> Self {
        let mut frame_interval = interval(frame);
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { frame_interval }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // No pending input: wait for the next frame
        let now = self.frame_interval.tick().await;
        Ok(EventType::Tick(now))
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick(Instant),
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
