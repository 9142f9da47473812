//! Toast lifecycle management.
//!
//! The [`Notifier`] owns every live toast and is driven entirely by explicit
//! clock instants: the UI loop calls [`Notifier::tick`] and the renderer reads
//! [`Notifier::toasts`]. Nothing here touches the terminal, which keeps the
//! whole lifecycle testable without one.

use std::fmt;
use std::time::{Duration, Instant};

/// How long a toast stays up when the caller does not say otherwise
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3200);

/// Delay between the start of the fade and detachment from the overlay.
/// Dismissal is two-phase so the fade is visible before the toast vanishes.
pub const TOAST_FADE: Duration = Duration::from_millis(200);

/// One-shot callback attached to a toast action button
type ActionCallback = Box<dyn FnOnce() + Send>;

/// An action button on a toast: a label plus a callback invoked at most once.
///
/// Label and callback always travel together; a toast without an action
/// renders no button at all.
pub struct ToastAction {
    label: String,
    on_select: Option<ActionCallback>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, on_select: impl FnOnce() + Send + 'static) -> Self {
        ToastAction {
            label: label.into(),
            on_select: Some(Box::new(on_select)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .field("pending", &self.on_select.is_some())
            .finish()
    }
}

/// Display options for a toast
#[derive(Debug)]
pub struct ToastOptions {
    /// How long the toast stays before auto-dismissal. A zero duration falls
    /// back to [`DEFAULT_TOAST_DURATION`].
    pub duration: Duration,
    /// Optional action button
    pub action: Option<ToastAction>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        ToastOptions {
            duration: DEFAULT_TOAST_DURATION,
            action: None,
        }
    }
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    pub fn action(mut self, label: impl Into<String>, on_select: impl FnOnce() + Send + 'static) -> Self {
        self.action = Some(ToastAction::new(label, on_select));
        self
    }
}

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// On screen, auto-dismiss deadline pending
    Visible,
    /// Fading out; detaches once the fade completes
    Fading,
}

/// A single transient message
#[derive(Debug)]
pub struct Toast {
    id: u64,
    message: String,
    action: Option<ToastAction>,
    phase: ToastPhase,
    /// Pending auto-dismiss deadline. Cleared when the toast is dismissed
    /// early, so a stale deadline can never fire on a fading toast.
    dismiss_at: Option<Instant>,
    /// Set when the fade starts; the toast detaches once this passes.
    detach_at: Option<Instant>,
}

impl Toast {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Label of the action button, if the toast has one
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(ToastAction::label)
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    pub fn is_fading(&self) -> bool {
        self.phase == ToastPhase::Fading
    }

    fn begin_fade(&mut self, now: Instant) {
        self.dismiss_at = None;
        self.detach_at = Some(now + TOAST_FADE);
        self.phase = ToastPhase::Fading;
    }
}

/// Owner of all live toasts, oldest first.
///
/// One notifier is created at startup and shared for the lifetime of the app;
/// every `show` call appends to the same stack.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast and returns its id.
    ///
    /// The auto-dismiss deadline is `now + options.duration`; a zero duration
    /// falls back to the default.
    pub fn show(&mut self, message: impl Into<String>, options: ToastOptions, now: Instant) -> u64 {
        let duration = if options.duration.is_zero() {
            DEFAULT_TOAST_DURATION
        } else {
            options.duration
        };

        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            action: options.action,
            phase: ToastPhase::Visible,
            dismiss_at: Some(now + duration),
            detach_at: None,
        });
        id
    }

    /// Dismisses a toast early (a click anywhere on its body).
    ///
    /// Cancels the pending auto-dismiss deadline and starts the fade. No-op
    /// for unknown ids and for toasts already fading, so the removal effect
    /// never runs twice.
    pub fn dismiss(&mut self, id: u64, now: Instant) {
        if let Some(toast) = self.visible_mut(id) {
            toast.begin_fade(now);
        }
    }

    /// Selects a toast's action button.
    ///
    /// Invokes the callback exactly once, then dismisses the toast. Returns
    /// whether the callback ran; `false` for unknown ids, fading toasts, and
    /// toasts without an action.
    pub fn select_action(&mut self, id: u64, now: Instant) -> bool {
        let Some(toast) = self.visible_mut(id) else {
            return false;
        };
        let Some(callback) = toast.action.as_mut().and_then(|a| a.on_select.take()) else {
            return false;
        };
        callback();
        if let Some(toast) = self.visible_mut(id) {
            toast.begin_fade(now);
        }
        true
    }

    /// Advances toast lifecycles to `now`: expired toasts start fading and
    /// fully faded toasts are detached.
    pub fn tick(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            if matches!(toast.dismiss_at, Some(deadline) if deadline <= now) {
                toast.begin_fade(now);
            }
        }
        self.toasts
            .retain(|t| !matches!(t.detach_at, Some(deadline) if deadline <= now));
    }

    /// Live toasts in arrival order (oldest first), fading ones included
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Id of the newest toast still visible (not fading)
    pub fn newest_visible(&self) -> Option<u64> {
        self.toasts
            .iter()
            .rev()
            .find(|t| t.phase == ToastPhase::Visible)
            .map(Toast::id)
    }

    /// Id of the newest visible toast with a still-pending action
    pub fn newest_actionable(&self) -> Option<u64> {
        self.toasts
            .iter()
            .rev()
            .find(|t| {
                t.phase == ToastPhase::Visible
                    && t.action.as_ref().is_some_and(|a| a.on_select.is_some())
            })
            .map(Toast::id)
    }

    fn visible_mut(&mut self, id: u64) -> Option<&mut Toast> {
        self.toasts
            .iter_mut()
            .find(|t| t.id == id && t.phase == ToastPhase::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_show_uses_default_duration() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        let id = notifier.show("hello", ToastOptions::default(), t0);

        // Still up just before the default deadline
        notifier.tick(t0 + DEFAULT_TOAST_DURATION - ms(1));
        assert_eq!(notifier.toasts()[0].phase(), ToastPhase::Visible);

        // Fading at the deadline, gone one fade later
        notifier.tick(t0 + DEFAULT_TOAST_DURATION);
        assert!(notifier.toasts()[0].is_fading());
        notifier.tick(t0 + DEFAULT_TOAST_DURATION + TOAST_FADE);
        assert!(notifier.is_empty());
        let _ = id;
    }

    #[test]
    fn test_zero_duration_falls_back_to_default() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("hello", ToastOptions::new().duration_ms(0), t0);

        notifier.tick(t0 + ms(500));
        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.toasts()[0].phase(), ToastPhase::Visible);
    }

    #[test]
    fn test_auto_dismissal_is_two_phase() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("short", ToastOptions::new().duration_ms(100), t0);

        // Expiry starts the fade
        notifier.tick(t0 + ms(100));
        assert_eq!(notifier.len(), 1);
        assert!(notifier.toasts()[0].is_fading());

        // Mid-fade the toast is still attached
        notifier.tick(t0 + ms(200));
        assert_eq!(notifier.len(), 1);

        // Detached once the fade completes (bounded well under 400ms total)
        notifier.tick(t0 + ms(301));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_early_dismiss_cancels_pending_timer() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        let id = notifier.show("bye", ToastOptions::new().duration_ms(5000), t0);

        notifier.dismiss(id, t0 + ms(50));
        assert!(notifier.toasts()[0].is_fading());

        // Dismissing again mid-fade is a no-op
        notifier.dismiss(id, t0 + ms(100));
        assert_eq!(notifier.toasts()[0].detach_at, Some(t0 + ms(50) + TOAST_FADE));

        // Gone after the fade; the original 5s deadline never fires
        notifier.tick(t0 + ms(250));
        assert!(notifier.is_empty());
        notifier.tick(t0 + ms(6000));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_action_callback_runs_exactly_once() {
        let t0 = Instant::now();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut notifier = Notifier::new();
        let id = notifier.show(
            "saved",
            ToastOptions::new().duration_ms(1000).action("Remove", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            t0,
        );

        assert!(notifier.select_action(id, t0 + ms(10)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(notifier.toasts()[0].is_fading());

        // A second selection does nothing
        assert!(!notifier.select_action(id, t0 + ms(20)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The original deadline does not fire after the toast detaches
        notifier.tick(t0 + ms(2000));
        assert!(notifier.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_select_action_without_action_is_noop() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        let id = notifier.show("plain", ToastOptions::default(), t0);

        assert!(!notifier.select_action(id, t0));
        assert_eq!(notifier.toasts()[0].phase(), ToastPhase::Visible);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("one", ToastOptions::default(), t0);

        notifier.dismiss(999, t0);
        assert!(!notifier.select_action(999, t0));
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn test_toasts_stack_in_arrival_order() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        let first = notifier.show("first", ToastOptions::default(), t0);
        let second = notifier.show("second", ToastOptions::default(), t0 + ms(10));

        let ids: Vec<u64> = notifier.toasts().iter().map(Toast::id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(notifier.toasts()[0].message(), "first");
        assert_eq!(notifier.toasts()[1].message(), "second");
    }

    #[test]
    fn test_newest_helpers_skip_fading_toasts() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        let with_action = notifier.show(
            "actionable",
            ToastOptions::new().action("Undo", || {}),
            t0,
        );
        let plain = notifier.show("plain", ToastOptions::default(), t0);

        assert_eq!(notifier.newest_visible(), Some(plain));
        assert_eq!(notifier.newest_actionable(), Some(with_action));

        notifier.dismiss(plain, t0 + ms(10));
        assert_eq!(notifier.newest_visible(), Some(with_action));

        notifier.dismiss(with_action, t0 + ms(10));
        assert_eq!(notifier.newest_visible(), None);
        assert_eq!(notifier.newest_actionable(), None);
    }

    #[test]
    fn test_independent_lifecycles() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.show("short", ToastOptions::new().duration_ms(100), t0);
        notifier.show("long", ToastOptions::new().duration_ms(1000), t0);

        notifier.tick(t0 + ms(301));
        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.toasts()[0].message(), "long");
    }
}
