//! # Toast Overlay
//!
//! Renders live toasts stacked in the bottom-right corner of the frame, on
//! top of whatever screen is showing, and records their clickable regions.

use crate::tui::app::ToastHit;
use crate::tui::ui::truncate_text;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Widest a toast box gets
const TOAST_WIDTH: u16 = 38;

/// Gap between stacked toasts
const TOAST_GAP: u16 = 1;

/// Render the toast overlay and record hit areas
pub fn render_toasts(frame: &mut Frame, app: &mut App) {
    app.toast_hits.clear();

    if app.notifier.is_empty() {
        return;
    }

    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(4));
    if width < 12 || area.height < 6 {
        return;
    }

    // Anchor to the corner above the status bar; newest toast sits nearest
    // the corner and older ones stack upward in arrival order.
    let right = area.right().saturating_sub(2);
    let mut bottom = area.bottom().saturating_sub(2);

    let mut hits = Vec::new();
    for toast in app.notifier.toasts().iter().rev() {
        let height: u16 = if toast.action_label().is_some() { 4 } else { 3 };
        if bottom < area.top() + height {
            break;
        }

        let rect = Rect::new(right.saturating_sub(width), bottom - height, width, height);
        let faded = toast.is_fading();

        let (border_style, text_style) = if faded {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        };

        let message = truncate_text(toast.message(), width.saturating_sub(4) as usize);
        let mut lines = vec![Line::from(Span::styled(message, text_style))];

        let mut action_rect = None;
        if let Some(label) = toast.action_label() {
            let action_style = if faded {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(format!("[ {} ]", label), action_style)).right_aligned());
            // The action row is the second inner line of the box
            action_rect = Some(Rect::new(rect.x + 1, rect.y + 2, width - 2, 1));
        }

        let body = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);

        hits.push(ToastHit {
            id: toast.id(),
            body: rect,
            action: action_rect,
        });

        bottom = rect.y.saturating_sub(TOAST_GAP);
    }

    // Hit areas are kept oldest-first like the notifier's stack
    hits.reverse();
    app.toast_hits = hits;
}
