//! Utility modules for the letsdoit application.
//!
//! - [`datetime`] - Clock and timestamp formatting

pub mod datetime;
