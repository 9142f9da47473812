//! # Vivid Promo Widget
//!
//! Terminal promo page for Vivid Sydney 2026: save a reminder on this device
//! and get toast feedback for every change.
//!
//! Usage: `cargo run --bin vivid`

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;

use vivid::core::Config;
use vivid::features::reminder::ReminderStore;
use vivid::store::SqliteStore;
use vivid::tui::event::{map_key_event, KeyAction};
use vivid::tui::{App, Event, EventHandler, Screen};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::load();
    info!("Starting vivid promo widget...");

    // Open the settings store and wire up the reminder preference
    let store = SqliteStore::open(&config.db_path)?;
    let reminder = ReminderStore::new(Arc::new(store));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and the event loop plumbing. The sender is shared
    // with toast action callbacks so their effects come back as events.
    let mut app = App::new(reminder);
    let (mut events, event_tx) = EventHandler::new(config.tick_rate());

    // Initialize the toggle from the store and greet a returning visitor
    app.on_startup(config.welcome_toast, Instant::now());

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &event_tx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("Vivid promo widget shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    event_tx: &UnboundedSender<Event>,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            vivid::tui::ui::render(frame, app);
        })?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    handle_action(app, map_key_event(key), event_tx);
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.handle_mouse_click(mouse.column, mouse.row, event_tx, Instant::now());
                    }
                }
                Event::Tick => {
                    app.notifier.tick(Instant::now());
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw automatically
                }
                Event::ReminderCleared => {
                    app.on_reminder_cleared(Instant::now());
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: KeyAction, event_tx: &UnboundedSender<Event>) {
    let now = Instant::now();
    match action {
        KeyAction::Quit => {
            app.should_quit = true;
        }
        KeyAction::SwitchScreen(screen) => {
            app.switch_screen(screen);
        }
        KeyAction::Back => {
            if app.current_screen == Screen::Help {
                app.switch_screen(Screen::Promo);
            }
        }
        KeyAction::ActivateToggle => {
            if app.current_screen == Screen::Promo {
                app.activate_toggle(event_tx, now);
            }
        }
        KeyAction::DismissToast => {
            app.dismiss_newest_toast(now);
        }
        KeyAction::SelectToastAction => {
            app.select_newest_action(now);
        }
        KeyAction::None => {}
    }
}
