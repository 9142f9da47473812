//! # Reminder Feature
//!
//! The single persisted preference: whether this device should be reminded
//! about the promoted event. Presence of the record means enabled; there is
//! no explicit disabled record.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Corrupted records now self-heal instead of surfacing a parse error
//! - 1.0.0: Initial release with save/clear/get over the settings store

pub mod preference;

pub use preference::{
    toggle_label, ReminderRecord, ReminderStore, ToggleOutcome, EVENT_DATES, EVENT_NAME,
    REMINDER_KEY,
};
