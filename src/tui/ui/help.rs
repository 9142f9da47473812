//! # Help Screen
//!
//! Key reference and feature versions.

use crate::features::{get_app_version, FEATURES};
use crate::tui::ui::titled_block;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Render the help screen
pub fn render_help(frame: &mut Frame, _app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),                           // Key bindings
            Constraint::Length(4 + FEATURES.len() as u16), // Features
        ])
        .split(area);

    render_keys(frame, chunks[0]);
    render_features(frame, chunks[1]);
}

fn render_keys(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let rows = [
        ("Enter / Space", "Toggle the reminder"),
        ("x", "Dismiss the newest toast"),
        ("a", "Select the newest toast's action"),
        ("1", "Promo screen"),
        ("?", "This help screen"),
        ("Esc", "Back to the promo screen"),
        ("q / Ctrl-C", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, description) in rows {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<14}", key), key_style),
            Span::raw(description),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Toasts can also be clicked: the body dismisses, the action row selects.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(titled_block("Keys"));
    frame.render_widget(paragraph, area);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for feature in FEATURES {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(feature.name, Style::default().fg(Color::White)),
            Span::raw(" "),
            Span::styled(
                format!("v{}", feature.version),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  vivid v{}", get_app_version()),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(titled_block("Features"));
    frame.render_widget(paragraph, area);
}
