use crate::exceptions::CalendarError;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date at day granularity. Two days are equal when year,
/// month and day-of-month all match; ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                CalendarError::InvalidDate(format!("{year:04}-{month:02}-{day:02}"))
            })
    }

    /// Drops the time-of-day, keeping the calendar date as seen in `dt`'s zone.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    /// Today's date on the local clock
    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days. `None` past chrono's supported range.
    pub fn offset_days(&self, days: i64) -> Option<Self> {
        let delta = chrono::Duration::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|e| CalendarError::InvalidDate(format!("'{s}' ({e})")))
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.to_string()
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}
