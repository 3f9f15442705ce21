//! Reusable UI components

pub mod badge;
pub mod scrollbar_helper;

// Component architecture
pub mod completed_list;
pub mod dialog_component;
pub mod footer;
pub mod particles;
pub mod status_bar;
pub mod task_input;
pub mod task_list_component;

// Component exports
pub use completed_list::CompletedListComponent;
pub use dialog_component::DialogComponent;
pub use footer::FooterComponent;
pub use particles::ParticleLayer;
pub use status_bar::StatusBar;
pub use task_input::TaskInputComponent;
pub use task_list_component::TaskListComponent;
