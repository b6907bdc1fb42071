/// Month grids and the per-day data a rendering surface needs for each cell
use crate::event_index::EventIndex;
use crate::exceptions::CalendarError;
use crate::models::{CalendarDay, ViewWindow};
use crate::selection::CalendarSelectionController;
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

pub type Week<T> = [Option<T>; 7];

/// First column of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Two-letter weekday labels in column order
    pub fn labels(&self) -> [&'static str; 7] {
        match self {
            Self::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
            Self::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
        }
    }

    fn column_of(&self, day: CalendarDay) -> usize {
        let weekday = day.naive_date().weekday();
        match self {
            Self::Sunday => weekday.num_days_from_sunday() as usize,
            Self::Monday => weekday.num_days_from_monday() as usize,
        }
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            other => Err(CalendarError::Config(format!(
                "unknown week start '{other}', expected sunday or monday"
            ))),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "sunday"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

/// The days of one month laid out in weeks. Slots before the first and
/// after the last day of the month are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    view: ViewWindow,
    week_start: WeekStart,
    weeks: Vec<Week<CalendarDay>>,
}

impl MonthGrid {
    pub fn new(view: ViewWindow, week_start: WeekStart) -> Self {
        let mut weeks = Vec::new();
        let Some(first) = view.first_day() else {
            return Self {
                view,
                week_start,
                weeks,
            };
        };

        let mut week: Week<CalendarDay> = [None; 7];
        let mut column = week_start.column_of(first);
        let mut current = Some(first);
        while let Some(day) = current.filter(|d| view.contains(*d)) {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
            current = day.offset_days(1);
        }
        if column > 0 {
            weeks.push(week);
        }

        Self {
            view,
            week_start,
            weeks,
        }
    }

    pub fn view(&self) -> ViewWindow {
        self.view
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn weeks(&self) -> &[Week<CalendarDay>] {
        &self.weeks
    }

    /// Day in the slot at (`week`, `column`), if any
    pub fn day_at(&self, week: usize, column: usize) -> Option<CalendarDay> {
        self.weeks.get(week).and_then(|w| w.get(column).copied().flatten())
    }
}

/// What a surface needs to draw one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: CalendarDay,
    /// day-of-month shown in the cell
    pub label: u32,
    pub has_event: bool,
    pub is_selected: bool,
    pub is_today: bool,
}

/// Compute the cells of `grid`, asking the event index and the controller
/// about every visible day. Call on every render pass: the result is a
/// snapshot and goes stale as soon as the selection changes.
pub fn day_cells(
    grid: &MonthGrid,
    index: &EventIndex,
    controller: &CalendarSelectionController,
    today: Option<CalendarDay>,
) -> Vec<Week<DayCell>> {
    grid.weeks()
        .iter()
        .copied()
        .map(|week| {
            week.map(|slot| {
                slot.map(|day| DayCell {
                    day,
                    label: day.day(),
                    has_event: index.has_event(day),
                    is_selected: controller.is_selected(day),
                    is_today: today == Some(day),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_february_2024_sunday_first() {
        // Feb 1 2024 is a Thursday
        let grid = MonthGrid::new(ViewWindow::new(2024, 2), WeekStart::Sunday);
        assert_eq!(grid.weeks().len(), 5);
        assert!(grid.weeks()[0][..4].iter().all(Option::is_none));
        assert_eq!(grid.day_at(0, 4), Some(day(2024, 2, 1)));
        assert_eq!(grid.day_at(4, 4), Some(day(2024, 2, 29)));
        assert_eq!(grid.day_at(4, 5), None);
    }

    #[test]
    fn test_february_2024_monday_first() {
        let grid = MonthGrid::new(ViewWindow::new(2024, 2), WeekStart::Monday);
        assert_eq!(grid.day_at(0, 3), Some(day(2024, 2, 1)));
        assert_eq!(grid.day_at(0, 2), None);
    }

    #[test]
    fn test_grid_holds_every_day_once() {
        let grid = MonthGrid::new(ViewWindow::new(2024, 6), WeekStart::Sunday);
        let days: Vec<CalendarDay> = grid.weeks().iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days.first(), Some(&day(2024, 6, 1)));
        assert_eq!(days.last(), Some(&day(2024, 6, 30)));
        // June 1 2024 is a Saturday so the month spills into a sixth week
        assert_eq!(grid.weeks().len(), 6);
    }

    #[test]
    fn test_four_week_month() {
        // Feb 2015 starts on a Sunday and has 28 days
        let grid = MonthGrid::new(ViewWindow::new(2015, 2), WeekStart::Sunday);
        assert_eq!(grid.weeks().len(), 4);
        assert!(grid.weeks().iter().all(|w| w.iter().all(Option::is_some)));
    }

    #[test]
    fn test_day_cells_flags() {
        let grid = MonthGrid::new(ViewWindow::new(2024, 2), WeekStart::Sunday);
        let index = EventIndex::new([day(2024, 2, 5), day(2024, 2, 12)]);
        let mut ctl =
            CalendarSelectionController::new(ViewWindow::new(2024, 2), 2020, 2025).unwrap();
        ctl.select_day(day(2024, 2, 12));

        let cells = day_cells(&grid, &index, &ctl, Some(day(2024, 2, 6)));
        let all: Vec<DayCell> = cells.iter().flatten().flatten().copied().collect();
        assert_eq!(all.len(), 29);

        let cell = |d: u32| all.iter().find(|c| c.label == d).copied().unwrap();
        assert!(cell(5).has_event && !cell(5).is_selected);
        assert!(cell(12).has_event && cell(12).is_selected);
        assert!(!cell(6).has_event && cell(6).is_today);
        assert_eq!(all.iter().filter(|c| c.is_selected).count(), 1);
    }

    #[test]
    fn test_day_cells_follow_selection_changes() {
        let grid = MonthGrid::new(ViewWindow::new(2024, 2), WeekStart::Sunday);
        let index = EventIndex::default();
        let mut ctl =
            CalendarSelectionController::new(ViewWindow::new(2024, 2), 2020, 2025).unwrap();

        ctl.select_day(day(2024, 2, 12));
        let before = day_cells(&grid, &index, &ctl, None);
        ctl.select_day(day(2024, 2, 15));
        let after = day_cells(&grid, &index, &ctl, None);

        let selected = |cells: &Vec<Week<DayCell>>| {
            cells
                .iter()
                .flatten()
                .flatten()
                .filter(|c| c.is_selected)
                .map(|c| c.label)
                .collect::<Vec<_>>()
        };
        assert_eq!(selected(&before), vec![12]);
        assert_eq!(selected(&after), vec![15]);
    }

    #[test]
    fn test_week_start_parse() {
        assert_eq!("Monday".parse::<WeekStart>().unwrap(), WeekStart::Monday);
        assert_eq!("sun".parse::<WeekStart>().unwrap(), WeekStart::Sunday);
        assert!("friday".parse::<WeekStart>().is_err());
    }
}
