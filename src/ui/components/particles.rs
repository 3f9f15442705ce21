//! Ambient bubbles drifting up behind the task list.
//!
//! Bubbles are generated once at start-up and stay hidden until the reveal
//! delay has passed. After that a new bubble joins on every spawn interval
//! and a theme change adds a small burst. The layer never holds more than
//! `max_particles` bubbles; the oldest are dropped first.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::config::ParticlesConfig;
use crate::constants::{
    PARTICLES_INITIAL_COUNT, PARTICLES_MIN_SPAWN_MS, PARTICLES_REVEAL_DELAY_MS, PARTICLES_THEME_BURST,
};

/// Opacity keyframes over a bubble's life, as `(progress, opacity)`
const OPACITY_KEYFRAMES: [(f32, f32); 4] = [(0.0, 0.0), (0.1, 0.7), (0.8, 0.3), (1.0, 0.0)];

/// A single bubble. Times are in seconds relative to the bubble's birth.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Horizontal position as a fraction of the area width
    pub left: f32,
    /// Nominal diameter, 20..100
    pub size: u16,
    /// Seconds needed to cross the screen
    pub duration: f32,
    /// Seconds to wait before starting to rise
    pub delay: f32,
    /// Seconds since the bubble was created
    pub age: f32,
}

impl Bubble {
    fn random(rng: &mut impl Rng, delay: f32) -> Self {
        Self {
            left: rng.random::<f32>(),
            size: rng.random_range(20..100),
            duration: rng.random_range(15..30) as f32,
            delay,
            age: 0.0,
        }
    }

    /// Fraction of the journey covered, 0 before the delay has elapsed
    pub fn progress(&self) -> f32 {
        ((self.age - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_alive(&self) -> bool {
        self.age - self.delay < self.duration
    }

    pub fn opacity(&self) -> f32 {
        let t = self.progress();
        if self.age < self.delay {
            return 0.0;
        }
        OPACITY_KEYFRAMES
            .windows(2)
            .find(|pair| t <= pair[1].0)
            .map(|pair| {
                let (t0, o0) = pair[0];
                let (t1, o1) = pair[1];
                o0 + (o1 - o0) * ((t - t0) / (t1 - t0))
            })
            .unwrap_or(0.0)
    }

    fn glyph(&self) -> &'static str {
        match self.size {
            0..=39 => "∘",
            40..=69 => "○",
            _ => "◯",
        }
    }
}

/// Bubble manager driven by the UI tick
pub struct ParticleLayer {
    bubbles: Vec<Bubble>,
    rng: StdRng,
    enabled: bool,
    max_particles: usize,
    spawn_interval: f32,
    since_spawn: f32,
    elapsed: Duration,
    last_update: Option<Instant>,
    color: Color,
    background: Color,
}

impl ParticleLayer {
    pub fn new(config: &ParticlesConfig) -> Self {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(config: &ParticlesConfig, mut rng: StdRng) -> Self {
        let bubbles = if config.enabled {
            let count = PARTICLES_INITIAL_COUNT.min(config.max_particles);
            (0..count)
                .map(|i| {
                    let delay = rng.random::<f32>() * 5.0 + i as f32 * 0.5;
                    Bubble::random(&mut rng, delay)
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            bubbles,
            rng,
            enabled: config.enabled,
            max_particles: config.max_particles,
            spawn_interval: config.spawn_interval_ms.max(PARTICLES_MIN_SPAWN_MS) as f32 / 1000.0,
            since_spawn: 0.0,
            elapsed: Duration::ZERO,
            last_update: None,
            color: Color::Reset,
            background: Color::Reset,
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn is_visible(&self) -> bool {
        self.enabled && self.elapsed >= Duration::from_millis(PARTICLES_REVEAL_DELAY_MS)
    }

    pub fn set_colors(&mut self, color: Color, background: Color) {
        self.color = color;
        self.background = background;
    }

    /// Advance using the wall-clock gap since the previous tick
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_update
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_update = Some(now);
        self.advance(dt);
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.enabled {
            return;
        }
        let was_visible = self.is_visible();
        self.elapsed += dt;
        let dt = dt.as_secs_f32();

        // Nothing moves until the layer is revealed
        if !was_visible {
            return;
        }

        for bubble in &mut self.bubbles {
            bubble.age += dt;
        }
        self.bubbles.retain(Bubble::is_alive);

        self.since_spawn += dt;
        while self.since_spawn >= self.spawn_interval {
            self.since_spawn -= self.spawn_interval;
            let bubble = Bubble::random(&mut self.rng, 0.0);
            self.push_keeping(1, [bubble]);
        }
    }

    /// Add a burst of fresh bubbles after a theme change
    pub fn theme_changed(&mut self) {
        if !self.is_visible() {
            return;
        }
        let burst: Vec<Bubble> = (0..PARTICLES_THEME_BURST)
            .map(|_| {
                let delay = self.rng.random::<f32>() * 3.0;
                Bubble::random(&mut self.rng, delay)
            })
            .collect();
        self.push_keeping(burst.len(), burst);
    }

    /// Drop the oldest bubbles so `incoming` new ones fit, then append them.
    fn push_keeping(&mut self, incoming: usize, new: impl IntoIterator<Item = Bubble>) {
        let keep = self.max_particles.saturating_sub(incoming);
        if self.bubbles.len() > keep {
            self.bubbles.drain(..self.bubbles.len() - keep);
        }
        self.bubbles.extend(new);
        if self.bubbles.len() > self.max_particles {
            self.bubbles.drain(..self.bubbles.len() - self.max_particles);
        }
    }
}

fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

impl Widget for &ParticleLayer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_visible() || area.width == 0 || area.height == 0 {
            return;
        }

        for bubble in &self.bubbles {
            let opacity = bubble.opacity();
            if opacity <= 0.05 {
                continue;
            }
            // Start just below the bottom edge and leave through the top
            let travel = area.height as f32 + 2.0;
            let offset = area.height as f32 + 1.0 - bubble.progress() * travel;
            if offset < 0.0 || offset >= area.height as f32 {
                continue;
            }
            let x = area.x + ((bubble.left * area.width as f32) as u16).min(area.width - 1);
            let y = area.y + offset as u16;

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(bubble.glyph())
                    .set_style(Style::default().fg(blend(self.color, self.background, opacity)));
            }
        }
    }
}
