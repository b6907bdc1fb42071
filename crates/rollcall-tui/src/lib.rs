use rollcall_core::{CalendarSelectionController, EventIndex, WeekStart};
use std::io;
use std::sync::Arc;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod tui;

pub use app::App;

/// Main entry point for the dashboard
pub async fn tui_main(
    controller: CalendarSelectionController,
    events: EventIndex,
    week_start: WeekStart,
) -> io::Result<()> {
    // Install color-eyre for better panic reports BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    // Capture logs in memory from here on so they don't draw over the screen
    let log_buffer = logger::init_memory_logger();

    let (mut app, action_receiver) =
        App::new(controller, Arc::new(events), week_start, log_buffer);

    let mut session = tui::TerminalSession::start()?;
    let result = app.run(session.terminal(), action_receiver).await;
    drop(session);

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
