/// Selection and month-navigation state for an event calendar
use crate::exceptions::CalendarError;
use crate::models::{CalendarDay, ViewWindow, YearBounds};

/// Single owner of "which day is selected" and "which month is shown".
///
/// Every operation after construction is total: out-of-range navigation is
/// clamped into the configured years and out-of-range selections are
/// ignored. Selecting the day that is already selected keeps it selected;
/// deselection only happens through [`clear_selection`](Self::clear_selection).
///
/// The controller does no locking of its own. Mutation needs `&mut self`, so
/// callers sharing one instance across call sites must serialize access
/// themselves (e.g. behind an `RwLock`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSelectionController {
    selection: Option<CalendarDay>,
    view: ViewWindow,
    bounds: YearBounds,
}

impl CalendarSelectionController {
    pub fn new(initial_view: ViewWindow, min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        Ok(Self::with_bounds(
            initial_view,
            YearBounds::new(min_year, max_year)?,
        ))
    }

    /// An initial view outside the bounds falls back to January of the
    /// earliest allowed year.
    pub fn with_bounds(initial_view: ViewWindow, bounds: YearBounds) -> Self {
        let view = if bounds.contains(initial_view.year()) {
            initial_view
        } else {
            log::debug!(
                "Initial view {} outside {}..={}, starting at January {}",
                initial_view,
                bounds.min_year(),
                bounds.max_year(),
                bounds.min_year()
            );
            ViewWindow::new(bounds.min_year(), 1)
        };
        Self {
            selection: None,
            view,
            bounds,
        }
    }

    /// Select `day` if its year is within bounds. Returns whether the
    /// selection was applied.
    pub fn select_day(&mut self, day: CalendarDay) -> bool {
        if !self.bounds.contains(day.year()) {
            log::debug!("Ignoring selection of out-of-range day {}", day);
            return false;
        }
        if self.selection != Some(day) {
            log::debug!("Selected {}", day);
        }
        self.selection = Some(day);
        true
    }

    /// Show `(year, month)`, clamping the year into bounds and the month
    /// into 1..=12. The selection is left untouched.
    pub fn change_view(&mut self, year: i32, month: u32) {
        let view = ViewWindow::new(self.bounds.clamp(year), month);
        if view.year() != year {
            log::debug!("View year {} clamped to {}", year, view.year());
        }
        self.view = view;
    }

    pub fn clear_selection(&mut self) {
        if let Some(day) = self.selection.take() {
            log::debug!("Cleared selection of {}", day);
        }
    }

    /// Step forward one month; stays on December of the last allowed year.
    pub fn next_month(&mut self) {
        let next = self.view.next();
        if self.bounds.contains(next.year()) {
            self.view = next;
        }
    }

    /// Step back one month; stays on January of the first allowed year.
    pub fn prev_month(&mut self) {
        let prev = self.view.prev();
        if self.bounds.contains(prev.year()) {
            self.view = prev;
        }
    }

    pub fn is_selected(&self, day: CalendarDay) -> bool {
        self.selection == Some(day)
    }

    pub fn selection(&self) -> Option<CalendarDay> {
        self.selection
    }

    pub fn current_view(&self) -> ViewWindow {
        self.view
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }
}
