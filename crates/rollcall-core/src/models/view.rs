use crate::exceptions::CalendarError;
use crate::models::CalendarDay;
use chrono::NaiveDate;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The (year, month) pair shown by a calendar grid. Month is always 1..=12;
/// every value is built through [`ViewWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewWindow {
    year: i32,
    month: u32,
}

impl ViewWindow {
    /// Months outside 1..=12 are clamped into range.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn of_day(day: CalendarDay) -> Self {
        Self::new(day.year(), day.month())
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year.saturating_add(1), 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year.saturating_sub(1), 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        day.year() == self.year && day.month() == self.month
    }

    /// First day of the month, `None` if the year is outside chrono's range.
    pub fn first_day(&self) -> Option<CalendarDay> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).map(CalendarDay::from)
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(following)) => {
                following.naive_date().signed_duration_since(first.naive_date()).num_days() as u32
            }
            _ => 31,
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Inclusive range of years a calendar may show or select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    min_year: i32,
    max_year: i32,
}

impl YearBounds {
    /// Both ends must be representable dates and `min_year <= max_year`.
    pub fn new(min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        let representable = NaiveDate::from_ymd_opt(min_year, 1, 1).is_some()
            && NaiveDate::from_ymd_opt(max_year, 12, 31).is_some();
        if min_year > max_year || !representable {
            return Err(CalendarError::InvalidBounds { min_year, max_year });
        }
        Ok(Self { min_year, max_year })
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min_year, self.max_year)
    }
}
