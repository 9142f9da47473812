//! # Promo Screen
//!
//! The event hero and the reminder toggle control.

use crate::features::reminder::{EVENT_DATES, EVENT_NAME};
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Render the promo screen
pub fn render_promo(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Hero
            Constraint::Length(3), // Toggle control
            Constraint::Length(2), // Hint
        ])
        .split(area);

    render_hero(frame, chunks[0]);
    render_toggle(frame, app, chunks[1]);
    render_hint(frame, chunks[2]);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            EVENT_NAME.to_uppercase(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Light · Music · Ideas",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            EVENT_DATES,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Harbour-wide light walks, rooftop soundscapes, and late-night",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "talks across the city. Save a reminder so you don't miss it.",
            Style::default().fg(Color::Gray),
        )),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(hero, area);
}

/// Render the toggle control and record its hit area.
///
/// The pressed state is carried by both the label and the color, matching
/// the saved/idle states of the stored preference.
fn render_toggle(frame: &mut Frame, app: &mut App, area: Rect) {
    let label = app.toggle_label();

    let width = (label.chars().count() as u16 + 6).max(20).min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let button_area = Rect::new(x, area.y, width, 3.min(area.height));

    let (border_style, label_style) = if app.reminder_saved {
        (
            Style::default().fg(Color::Green),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::Magenta),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(button, button_area);
    app.toggle_area = Some(button_area);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter/Space or click to toggle the reminder",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, area);
}
