/// This config file lists out the default values for the main ROLLCALL env configs.
/// Each can be overridden by an ENV var of the same name, and most from the
/// command line as well. These should only be primitive types.
use crate::exceptions::CalendarError;
use crate::grid::WeekStart;
use std::env;
use std::str::FromStr;

/// event file loaded at startup
pub static ROLLCALL_EVENTS_FILE: &'static str = "events.yaml";

/// earliest year the calendar may show or select
pub static ROLLCALL_MIN_YEAR: i32 = 1900;

/// latest year the calendar may show or select
pub static ROLLCALL_MAX_YEAR: i32 = 2099;

/// first column of the month grid
pub static ROLLCALL_WEEK_START: &'static str = "sunday";

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub events_file: String,
    /// true when `events_file` came from the environment or the caller
    /// rather than the built-in default
    pub events_file_explicit: bool,
    pub min_year: i32,
    pub max_year: i32,
    pub week_start: WeekStart,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            events_file: ROLLCALL_EVENTS_FILE.to_string(),
            events_file_explicit: false,
            min_year: ROLLCALL_MIN_YEAR,
            max_year: ROLLCALL_MAX_YEAR,
            week_start: WeekStart::default(),
        }
    }
}

impl CalendarConfig {
    /// Defaults overridden by any ROLLCALL_* variables set in the environment
    pub fn from_env() -> Result<Self, CalendarError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CalendarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let events_file = lookup("ROLLCALL_EVENTS_FILE");
        Ok(Self {
            events_file_explicit: events_file.is_some(),
            events_file: events_file.unwrap_or_else(|| ROLLCALL_EVENTS_FILE.to_string()),
            min_year: parse_var(&lookup, "ROLLCALL_MIN_YEAR", ROLLCALL_MIN_YEAR)?,
            max_year: parse_var(&lookup, "ROLLCALL_MAX_YEAR", ROLLCALL_MAX_YEAR)?,
            week_start: match lookup("ROLLCALL_WEEK_START") {
                Some(v) => v.parse()?,
                None => ROLLCALL_WEEK_START.parse()?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, CalendarError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CalendarError::Config(format!("{name} must be a number, got '{raw}'"))),
        None => Ok(default),
    }
}
