use clap::{Parser, Subcommand};
use rollcall_core::{CalendarDay, ViewWindow, WeekStart};

/// Attendance calendar: browse the days that have events and select one
#[derive(Parser)]
#[command(name = "rollcall", version, about, long_about = None)]
pub struct Cli {
    /// Event file to load (.yaml, .yml or .json). Overrides ROLLCALL_EVENTS_FILE
    #[arg(long, short, global = true)]
    pub events: Option<String>,

    /// Earliest year that can be shown or selected
    #[arg(long, global = true)]
    pub min_year: Option<i32>,

    /// Latest year that can be shown or selected
    #[arg(long, global = true)]
    pub max_year: Option<i32>,

    /// First column of the month grid
    #[arg(long, short, global = true, value_parser = parse_week_start)]
    pub week_start: Option<WeekStart>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard (default)
    Tui,
    /// Print a month as text, event days marked with `*`
    Month(MonthArgs),
    /// Report whether a day has an event
    Check(CheckArgs),
    /// List event days
    Events(MonthArgs),
}

#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month as YYYY-MM. `month` defaults to the current month,
    /// `events` lists every event day when omitted
    #[arg(value_parser = parse_month)]
    pub month: Option<ViewWindow>,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Day as YYYY-MM-DD
    pub date: String,
}

fn parse_week_start(s: &str) -> Result<WeekStart, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// YYYY-MM into a view window
pub fn parse_month(s: &str) -> Result<ViewWindow, String> {
    // going through a full date keeps the accepted years in line with CalendarDay
    let day: CalendarDay = format!("{}-01", s.trim())
        .parse()
        .map_err(|_| format!("expected a month as YYYY-MM, got '{s}'"))?;
    Ok(ViewWindow::of_day(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-02"), Ok(ViewWindow::new(2024, 2)));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("february").is_err());
    }

    #[test]
    fn test_no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["rollcall", "--week-start", "monday"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.week_start, Some(WeekStart::Monday));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["rollcall", "month", "2024-02", "--min-year", "2020"]).unwrap();
        assert_eq!(cli.min_year, Some(2020));
        match cli.command {
            Some(Command::Month(args)) => assert_eq!(args.month, Some(ViewWindow::new(2024, 2))),
            _ => panic!("expected the month command"),
        }

        let cli = Cli::try_parse_from(["rollcall", "check", "2024-02-05"]).unwrap();
        match cli.command {
            Some(Command::Check(args)) => assert_eq!(args.date, "2024-02-05"),
            _ => panic!("expected the check command"),
        }

        assert!(Cli::try_parse_from(["rollcall", "--week-start", "friday"]).is_err());
    }
}
