use clap::Parser;
use dotenv::dotenv;
use log::warn;
use rollcall_core::{
    CalendarConfig, CalendarDay, CalendarError, CalendarSelectionController, EventIndex,
    ViewWindow, load_event_file,
};
use std::error::Error;
use std::path::Path;
use std::process;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();
    let command = cli.command.as_ref().unwrap_or(&Command::Tui);

    // the dashboard installs its own in-memory logger
    if !matches!(command, Command::Tui) {
        env_logger::init();
    }

    if let Err(e) = _main(&cli, command).await {
        eprintln!("{}", error_line(&*e));
        process::exit(1);
    }
}

fn error_line(e: &dyn Error) -> String {
    format!("Error: {e}")
}

async fn _main(cli: &Cli, command: &Command) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(cli)?;
    let events = load_events(&config)?;
    let controller = CalendarSelectionController::new(
        ViewWindow::of_day(CalendarDay::today()),
        config.min_year,
        config.max_year,
    )?;

    match command {
        Command::Tui => {
            rollcall_tui::tui_main(controller, events, config.week_start).await?;
        }
        Command::Month(args) => {
            println!(
                "{}",
                commands::month(controller, &events, config.week_start, args.month)
            );
        }
        Command::Check(args) => println!("{}", commands::check(&events, &args.date)?),
        Command::Events(args) => {
            let listing = commands::list_events(&events, args.month);
            if !listing.is_empty() {
                println!("{listing}");
            }
        }
    }
    Ok(())
}

/// Environment config with command line flags taking precedence
fn resolve_config(cli: &Cli) -> Result<CalendarConfig, CalendarError> {
    let mut config = CalendarConfig::from_env()?;
    if let Some(events) = &cli.events {
        config.events_file = events.clone();
        config.events_file_explicit = true;
    }
    if let Some(min_year) = cli.min_year {
        config.min_year = min_year;
    }
    if let Some(max_year) = cli.max_year {
        config.max_year = max_year;
    }
    if let Some(week_start) = cli.week_start {
        config.week_start = week_start;
    }
    Ok(config)
}

/// A missing default event file just means no events. A file the user
/// asked for has to exist.
fn load_events(config: &CalendarConfig) -> Result<EventIndex, CalendarError> {
    if !config.events_file_explicit && !Path::new(&config.events_file).exists() {
        warn!(
            "No event file found at {}, starting with an empty calendar",
            config.events_file
        );
        return Ok(EventIndex::default());
    }
    load_event_file(&config.events_file)
}
