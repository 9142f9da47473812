//! # Features
//!
//! Feature modules for the promo widget, plus static metadata about each one
//! for display on the help screen.

pub mod notify;
pub mod reminder;

// Re-export feature items
pub use notify::{
    Notifier, Toast, ToastAction, ToastOptions, ToastPhase, DEFAULT_TOAST_DURATION, TOAST_FADE,
};
pub use reminder::{
    toggle_label, ReminderRecord, ReminderStore, ToggleOutcome, EVENT_DATES, EVENT_NAME,
    REMINDER_KEY,
};

/// Static metadata about a feature
pub struct Feature {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub toggleable: bool,
}

/// All features, in display order
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "notify",
        name: "Toast Notifications",
        version: "1.0.0",
        toggleable: false,
    },
    Feature {
        id: "reminder",
        name: "Event Reminder",
        version: "1.1.0",
        toggleable: true,
    },
];

/// The application version from Cargo metadata
pub fn get_app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
