// Core layer - shared configuration
pub mod core;

// Features layer - toast notifications and the reminder preference
pub mod features;

// Infrastructure - persistent key-value settings store
pub mod store;

// TUI layer - terminal user interface
pub mod tui;

// Re-export core config
pub use core::Config;

// Re-export feature items
pub use features::{
    // Notifier
    Notifier, Toast, ToastAction, ToastOptions, ToastPhase,
    // Reminder preference
    ReminderRecord, ReminderStore, ToggleOutcome,
};

// Re-export storage items
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
