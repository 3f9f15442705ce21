//! letsdoit - a themed terminal task list
//!
//! Tasks are added, completed and re-prioritised in a full-screen terminal
//! UI. The active list, the completed list and the chosen theme are kept as
//! independent snapshots in a local SQLite database.
//!
//! # Modules
//!
//! * [`tasks`] - Task model and the in-memory store
//! * [`storage`] - Snapshot persistence
//! * [`service`] - Store plus persistence, as used by the UI
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Date/time helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Task service tying the store to its storage
pub mod service;

/// Snapshot storage backends
pub mod storage;

/// Task model, pure list operations and the store
pub mod tasks;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use service::TaskService;
pub use tasks::{CompletedTask, Priority, Task, TaskStore, Theme};
