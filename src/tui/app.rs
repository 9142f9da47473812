//! # TUI Application Core
//!
//! Main application state: the current screen, the notifier, and the cached
//! toggle state, plus the click-to-widget hit areas recorded at render time.

use crate::features::notify::{Notifier, ToastOptions};
use crate::features::reminder::{ReminderStore, ToggleOutcome};
use crate::tui::event::Event;
use log::warn;
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Promo,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Promo => "Promo",
            Screen::Help => "Help",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Screen::Promo => '1',
            Screen::Help => '?',
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Promo, Screen::Help]
    }
}

/// Clickable regions of one rendered toast
#[derive(Debug, Clone, Copy)]
pub struct ToastHit {
    pub id: u64,
    /// The whole toast box; a click here dismisses
    pub body: Rect,
    /// The action button row, when the toast has one
    pub action: Option<Rect>,
}

/// Main application state
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Live toasts
    pub notifier: Notifier,
    /// The persisted reminder preference
    pub reminder: ReminderStore,
    /// Cached toggle state, re-read from the store after every change
    pub reminder_saved: bool,
    /// Error message for the status bar
    pub error_message: Option<String>,
    /// Hit area of the toggle control, recorded at render time
    pub toggle_area: Option<Rect>,
    /// Hit areas of rendered toasts, oldest first, recorded at render time
    pub toast_hits: Vec<ToastHit>,
}

impl App {
    pub fn new(reminder: ReminderStore) -> Self {
        App {
            current_screen: Screen::Promo,
            should_quit: false,
            notifier: Notifier::new(),
            reminder,
            reminder_saved: false,
            error_message: None,
            toggle_area: None,
            toast_hits: Vec::new(),
        }
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.error_message = None;
    }

    /// Label of the toggle control for the current state
    pub fn toggle_label(&self) -> &'static str {
        crate::features::reminder::toggle_label(self.reminder_saved)
    }

    /// Re-reads the toggle state from the store.
    ///
    /// A storage failure is reported in the status bar and leaves the control
    /// in the idle state.
    pub fn refresh_toggle_state(&mut self) {
        match self.reminder.is_saved() {
            Ok(saved) => self.reminder_saved = saved,
            Err(e) => {
                warn!("Failed to read reminder state: {}", e);
                self.error_message = Some(format!("Storage error: {}", e));
                self.reminder_saved = false;
            }
        }
    }

    /// Startup pass: initialize the toggle state and greet a returning
    /// visitor whose reminder is still saved.
    pub fn on_startup(&mut self, welcome_toast: bool, now: Instant) {
        self.refresh_toggle_state();
        if welcome_toast && self.reminder_saved {
            self.notifier.show(
                "Welcome back! Your reminder is still saved ✓",
                ToastOptions::new().duration_ms(2400),
                now,
            );
        }
    }

    /// Activation of the toggle control (Enter/Space or a click).
    ///
    /// Absent reminder: save it and confirm. Present reminder: offer removal
    /// through a toast action; the callback clears the store directly and
    /// reports back over the event channel so the UI refreshes.
    pub fn activate_toggle(&mut self, tx: &UnboundedSender<Event>, now: Instant) {
        match self.reminder.toggle() {
            Ok(ToggleOutcome::Saved(_)) => {
                self.refresh_toggle_state();
                self.notifier.show(
                    "Done! We saved a reminder on this device.",
                    ToastOptions::new().duration_ms(3200),
                    now,
                );
            }
            Ok(ToggleOutcome::AlreadySaved(_)) => {
                let store = self.reminder.clone();
                let tx = tx.clone();
                self.notifier.show(
                    "Reminder is already saved.",
                    ToastOptions::new().action("Remove", move || {
                        if let Err(e) = store.clear() {
                            warn!("Failed to clear reminder: {}", e);
                        }
                        let _ = tx.send(Event::ReminderCleared);
                    }),
                    now,
                );
            }
            Err(e) => {
                warn!("Reminder toggle failed: {}", e);
                self.error_message = Some(format!("Storage error: {}", e));
            }
        }
    }

    /// Follow-up after the "Remove" action cleared the store
    pub fn on_reminder_cleared(&mut self, now: Instant) {
        self.refresh_toggle_state();
        self.notifier.show(
            "Reminder removed.",
            ToastOptions::new().duration_ms(2200),
            now,
        );
    }

    /// Keyboard dismissal of the newest toast
    pub fn dismiss_newest_toast(&mut self, now: Instant) {
        if let Some(id) = self.notifier.newest_visible() {
            self.notifier.dismiss(id, now);
        }
    }

    /// Keyboard selection of the newest toast action
    pub fn select_newest_action(&mut self, now: Instant) {
        if let Some(id) = self.notifier.newest_actionable() {
            self.notifier.select_action(id, now);
        }
    }

    /// Routes a left click to whatever sits under it.
    ///
    /// Toasts overlay everything else, so they are hit-tested first, newest
    /// first; a click on the action row selects, anywhere else on the body
    /// dismisses. Otherwise a click on the toggle control activates it.
    pub fn handle_mouse_click(
        &mut self,
        column: u16,
        row: u16,
        tx: &UnboundedSender<Event>,
        now: Instant,
    ) {
        let pos = Position::new(column, row);

        let toast_hit = self
            .toast_hits
            .iter()
            .rev()
            .find(|hit| hit.body.contains(pos))
            .map(|hit| (hit.id, hit.action.is_some_and(|r| r.contains(pos))));
        if let Some((id, on_action)) = toast_hit {
            if on_action {
                self.notifier.select_action(id, now);
            } else {
                self.notifier.dismiss(id, now);
            }
            return;
        }

        if self.current_screen == Screen::Promo
            && self.toggle_area.is_some_and(|r| r.contains(pos))
        {
            self.activate_toggle(tx, now);
        }
    }
}
