//! Reminder preference storage.
//!
//! One JSON record under a fixed key in the settings store. The store is the
//! single source of truth for the toggle control's state; the UI re-reads it
//! after every change rather than tracking its own copy.

use crate::store::KeyValueStore;
use anyhow::Result;
use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Settings-store key of the reminder record
pub const REMINDER_KEY: &str = "vividSydney2026_reminder";

/// Display label of the promoted event
pub const EVENT_NAME: &str = "Vivid Sydney 2026";

/// Display string of the event's date range
pub const EVENT_DATES: &str = "22 May – 13 June 2026";

/// The persisted reminder preference.
///
/// `enabled` is always `true` when the record exists; turning the reminder
/// off deletes the record instead of writing `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub enabled: bool,
    /// RFC 3339 timestamp of when the reminder was saved
    pub saved_at: String,
    pub event: String,
    pub dates: String,
}

impl ReminderRecord {
    /// A fresh record stamped with the current time
    fn now() -> Self {
        ReminderRecord {
            enabled: true,
            saved_at: Utc::now().to_rfc3339(),
            event: EVENT_NAME.to_string(),
            dates: EVENT_DATES.to_string(),
        }
    }
}

/// What a toggle activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No reminder existed; one was saved
    Saved(ReminderRecord),
    /// A reminder already existed; nothing was written
    AlreadySaved(ReminderRecord),
}

/// Reads and writes the reminder record in the settings store.
///
/// Cheap to clone; clones share the same backing store, so a toast action
/// callback can capture its own handle.
#[derive(Clone)]
pub struct ReminderStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ReminderStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        ReminderStore { kv }
    }

    /// Saves a fresh reminder record, overwriting any existing one.
    pub fn save(&self) -> Result<ReminderRecord> {
        let record = ReminderRecord::now();
        self.kv.put(REMINDER_KEY, &serde_json::to_string(&record)?)?;
        debug!("Saved reminder at {}", record.saved_at);
        Ok(record)
    }

    /// Deletes the reminder record. No-op when none exists.
    pub fn clear(&self) -> Result<()> {
        self.kv.delete(REMINDER_KEY)?;
        debug!("Cleared reminder");
        Ok(())
    }

    /// Returns the stored record, or `None` when absent.
    ///
    /// A value that fails to parse is treated as corruption: the key is
    /// deleted and `None` is returned. The parse error never reaches the
    /// caller.
    pub fn get(&self) -> Result<Option<ReminderRecord>> {
        let Some(raw) = self.kv.get(REMINDER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<ReminderRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Corrupted reminder record, clearing it: {}", e);
                self.kv.delete(REMINDER_KEY)?;
                Ok(None)
            }
        }
    }

    /// Whether an enabled reminder is currently stored
    pub fn is_saved(&self) -> Result<bool> {
        Ok(self.get()?.is_some_and(|r| r.enabled))
    }

    /// Branches a toggle activation on the current state.
    ///
    /// Saves when absent; reports the existing record when present. Clearing
    /// only happens through the explicit remove action, never here.
    pub fn toggle(&self) -> Result<ToggleOutcome> {
        match self.get()? {
            Some(existing) if existing.enabled => Ok(ToggleOutcome::AlreadySaved(existing)),
            _ => Ok(ToggleOutcome::Saved(self.save()?)),
        }
    }
}

/// Label of the toggle control for a given saved state
pub fn toggle_label(saved: bool) -> &'static str {
    if saved {
        "Reminder saved ✓"
    } else {
        "Remind me"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::DateTime;

    fn store() -> (ReminderStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (ReminderStore::new(kv.clone()), kv)
    }

    #[test]
    fn test_get_after_clear_is_absent() {
        let (reminder, _) = store();
        reminder.save().unwrap();
        reminder.clear().unwrap();
        assert_eq!(reminder.get().unwrap(), None);
        assert!(!reminder.is_saved().unwrap());
    }

    #[test]
    fn test_clear_when_absent_is_noop() {
        let (reminder, _) = store();
        reminder.clear().unwrap();
        assert_eq!(reminder.get().unwrap(), None);
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let (reminder, _) = store();
        let before = Utc::now();
        reminder.save().unwrap();

        let record = reminder.get().unwrap().expect("record should exist");
        assert!(record.enabled);
        assert_eq!(record.event, EVENT_NAME);
        assert_eq!(record.dates, EVENT_DATES);

        let saved_at = DateTime::parse_from_rfc3339(&record.saved_at)
            .expect("savedAt should be RFC 3339");
        assert!(saved_at <= Utc::now());
        assert!(saved_at >= before);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let (reminder, kv) = store();
        reminder.save().unwrap();

        let raw = kv.get(REMINDER_KEY).unwrap().expect("raw value");
        assert!(raw.contains("\"savedAt\""));
        assert!(raw.contains("\"enabled\":true"));
    }

    #[test]
    fn test_corrupted_record_self_heals() {
        let (reminder, kv) = store();
        kv.put(REMINDER_KEY, "{not json").unwrap();

        assert_eq!(reminder.get().unwrap(), None);
        // The corrupted value was deleted, not just ignored
        assert_eq!(kv.get(REMINDER_KEY).unwrap(), None);
    }

    #[test]
    fn test_repeated_saves_refresh_timestamp() {
        let (reminder, _) = store();
        let first = reminder.save().unwrap();
        let second = reminder.save().unwrap();

        let a = DateTime::parse_from_rfc3339(&first.saved_at).unwrap();
        let b = DateTime::parse_from_rfc3339(&second.saved_at).unwrap();
        assert!(b >= a);
        assert_eq!(reminder.get().unwrap().unwrap().saved_at, second.saved_at);
    }

    #[test]
    fn test_toggle_saves_when_absent() {
        let (reminder, _) = store();
        match reminder.toggle().unwrap() {
            ToggleOutcome::Saved(record) => assert!(record.enabled),
            other => panic!("expected Saved, got {:?}", other),
        }
        assert!(reminder.is_saved().unwrap());
    }

    #[test]
    fn test_toggle_reports_existing_without_writing() {
        let (reminder, kv) = store();
        let saved = reminder.save().unwrap();
        let raw_before = kv.get(REMINDER_KEY).unwrap();

        match reminder.toggle().unwrap() {
            ToggleOutcome::AlreadySaved(record) => assert_eq!(record, saved),
            other => panic!("expected AlreadySaved, got {:?}", other),
        }
        assert_eq!(kv.get(REMINDER_KEY).unwrap(), raw_before);
    }

    #[test]
    fn test_disabled_record_counts_as_absent_for_toggle() {
        let (reminder, kv) = store();
        // Never written by this app, but tolerated: a record with enabled=false
        kv.put(
            REMINDER_KEY,
            r#"{"enabled":false,"savedAt":"2026-01-01T00:00:00Z","event":"x","dates":"y"}"#,
        )
        .unwrap();

        assert!(!reminder.is_saved().unwrap());
        match reminder.toggle().unwrap() {
            ToggleOutcome::Saved(record) => assert!(record.enabled),
            other => panic!("expected Saved, got {:?}", other),
        }
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(true), "Reminder saved ✓");
        assert_eq!(toggle_label(false), "Remind me");
    }

    #[test]
    fn test_clones_share_the_backing_store() {
        let (reminder, _) = store();
        let other = reminder.clone();
        reminder.save().unwrap();
        assert!(other.is_saved().unwrap());
        other.clear().unwrap();
        assert!(!reminder.is_saved().unwrap());
    }
}
