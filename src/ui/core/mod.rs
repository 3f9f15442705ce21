//! Core UI building blocks: actions, the component trait and event handling.
//!
//! Components turn key presses into [`Action`]s; the app component applies
//! them to the task service and UI-local state. Timer ticks come from the
//! [`EventHandler`] and only ever touch UI-local state.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
