//! # Notification Feature
//!
//! Short-lived toast messages stacked in a fixed screen corner, optionally
//! carrying a single action button.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with two-phase dismissal and one-shot actions

pub mod toast;

pub use toast::{
    Notifier, Toast, ToastAction, ToastOptions, ToastPhase, DEFAULT_TOAST_DURATION, TOAST_FADE,
};
