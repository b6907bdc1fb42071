use std::fmt;

#[derive(Debug, PartialEq)]
pub enum CalendarError {
    /// year/month/day triple that does not name a real calendar date
    InvalidDate(String),
    InvalidBounds { min_year: i32, max_year: i32 },
    /// event file could not be read or parsed
    EventFile { path: String, reason: String },
    Config(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "InvalidDate: {s}"),
            Self::InvalidBounds { min_year, max_year } => write!(
                f,
                "InvalidBounds: year range {min_year}..={max_year} is empty or not representable"
            ),
            Self::EventFile { path, reason } => {
                write!(f, "EventFileError: unable to load {path}: {reason}")
            }
            Self::Config(s) => write!(f, "ConfigError: {s}"),
        }
    }
}

impl std::error::Error for CalendarError {}
