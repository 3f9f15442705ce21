//! Terminal user interface
//!
//! A component tree rendered with ratatui. [`run_app`] owns the terminal and
//! the event loop; [`AppComponent`] owns the task service and routes every
//! key press through it.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use theme::Palette;
