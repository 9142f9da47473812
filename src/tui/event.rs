//! # TUI Event Handling
//!
//! Keyboard, mouse, and tick event handling.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic updates (drives toast timers)
    Tick,
    /// The "Remove" toast action cleared the stored reminder
    ReminderCleared,
}

/// Event handler that combines terminal input and tick events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    ///
    /// Also returns the sender so other parts of the app (toast action
    /// callbacks in particular) can inject events into the same loop.
    pub fn new(tick_rate: Duration) -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn terminal input handler
        let input_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if input_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => {
                            if input_tx.send(Event::Mouse(mouse)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if input_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on poll timeout
                    if input_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        (EventHandler { rx }, tx)
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Activate the reminder toggle control
    ActivateToggle,
    /// Dismiss the newest toast
    DismissToast,
    /// Select the newest toast's action button
    SelectToastAction,
    /// Switch to screen
    SwitchScreen(crate::tui::Screen),
    /// Go back to the promo screen
    Back,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent) -> KeyAction {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

        // Screen switching
        (KeyCode::Char('1'), KeyModifiers::NONE) => {
            KeyAction::SwitchScreen(crate::tui::Screen::Promo)
        }
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            KeyAction::SwitchScreen(crate::tui::Screen::Help)
        }

        // The toggle control
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            KeyAction::ActivateToggle
        }

        // Toasts
        (KeyCode::Char('x'), KeyModifiers::NONE) => KeyAction::DismissToast,
        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::SelectToastAction,

        (KeyCode::Esc, _) => KeyAction::Back,

        _ => KeyAction::None,
    }
}
