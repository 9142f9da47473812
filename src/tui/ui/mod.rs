//! # TUI UI Components
//!
//! Ratatui-based rendering: tab bar, screens, status bar, and the toast
//! overlay.

mod help;
mod promo;
mod toasts;

pub use help::render_help;
pub use promo::render_promo;
pub use toasts::render_toasts;

use crate::tui::{App, Screen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// Main render function - dispatches to screen-specific renderers.
///
/// Takes the app mutably because the promo screen and the toast overlay
/// record their clickable regions for mouse dispatch.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Render tab bar
    render_tabs(frame, app, chunks[0]);

    // Render current screen
    match app.current_screen {
        Screen::Promo => render_promo(frame, app, chunks[1]),
        Screen::Help => render_help(frame, app, chunks[1]),
    }

    // Render status bar
    render_status_bar(frame, app, chunks[2]);

    // Toasts overlay everything else, so they go last
    render_toasts(frame, app);
}

/// Render the tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .map(|s| {
            let style = if *s == app.current_screen {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!("[{}] {}", s.key(), s.title())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Vivid Sydney 2026 "))
        .select(
            Screen::all()
                .iter()
                .position(|s| *s == app.current_screen)
                .unwrap_or(0),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));

    frame.render_widget(tabs, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let reminder_status = if app.reminder_saved {
        Span::styled("● Reminder saved", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ No reminder", Style::default().fg(Color::Gray))
    };

    // Error message, if any
    let message = if let Some(err) = &app.error_message {
        Span::styled(format!(" Error: {} ", err), Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };

    let help_hint = Span::styled(
        " q:Quit ?:Help x:Dismiss a:Action ",
        Style::default().fg(Color::DarkGray),
    );

    let status_line = Line::from(vec![
        reminder_status,
        Span::raw(" | "),
        message,
        Span::raw(" "),
        help_hint,
    ]);

    let paragraph = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

/// Helper to truncate text
pub fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_short_passthrough() {
        assert_eq!(truncate_text("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_text_counts_chars_not_bytes() {
        assert_eq!(truncate_text("Reminder saved ✓", 16), "Reminder saved ✓");
    }
}
