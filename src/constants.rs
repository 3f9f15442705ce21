//! Constants used throughout the application
//!
//! This module centralizes UI text and other constant values.

// UI Text
pub const APP_TITLE: &str = "LET'S DO IT";
pub const INPUT_PLACEHOLDER: &str = "Add a task.";
pub const EMPTY_LIST_PLACEHOLDER: &str = "Your tasks will appear here";
pub const FOOTER_BRAND: &str = "letsdoit";

// Priority badge labels
pub const LABEL_PRIORITY_NORMAL: &str = "Normal Priority";
pub const LABEL_PRIORITY_HIGH: &str = "High Priority";
pub const LABEL_PRIORITY_LOW: &str = "Low Priority";

// Status Messages
pub const SUCCESS_TASK_ADDED: &str = "✅ Task added";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASKS_CLEARED: &str = "✅ Tasks cleared";
pub const SUCCESS_COMPLETED_CLEARED: &str = "✅ Completed tasks cleared";
pub const ERROR_SAVE_FAILED: &str = "❌ Failed to save";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// Particle Constants
/// Default upper bound on live bubbles
pub const PARTICLES_DEFAULT_MAX: usize = 15;
/// Largest accepted `max_particles`
pub const PARTICLES_MAX_LIMIT: usize = 100;
/// Default milliseconds between spawned bubbles
pub const PARTICLES_DEFAULT_SPAWN_MS: u64 = 3000;
/// Smallest accepted spawn interval in milliseconds
pub const PARTICLES_MIN_SPAWN_MS: u64 = 100;
/// Bubbles generated at start-up
pub const PARTICLES_INITIAL_COUNT: usize = 10;
/// Bubbles added when the theme changes
pub const PARTICLES_THEME_BURST: usize = 5;
/// Delay before the first bubbles appear, in milliseconds
pub const PARTICLES_REVEAL_DELAY_MS: u64 = 1400;

// Timer Constants
/// Footer clock refresh interval in milliseconds
pub const CLOCK_TICK_MS: u64 = 1000;
/// Animation frame interval in milliseconds
pub const ANIMATION_FRAME_MS: u64 = 50;
/// How long a status message stays visible, in milliseconds
pub const STATUS_MESSAGE_MS: u64 = 2500;
