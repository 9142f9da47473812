//! # TUI Module
//!
//! Terminal user interface for the event promo widget.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.4.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Mouse support for the toggle control and toast buttons
//! - 1.1.0: Help screen with key reference and feature versions
//! - 1.0.0: Initial implementation with promo screen and toast overlay

pub mod app;
pub mod event;
pub mod ui;

pub use app::{App, Screen};
pub use event::{Event, EventHandler};
