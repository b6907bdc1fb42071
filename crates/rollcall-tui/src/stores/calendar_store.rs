/// CalendarStore owns the selection controller and the keyboard cursor
use crate::actions::Action;
use ratatui::layout::Rect;
use rollcall_core::{
    CalendarDay, CalendarSelectionController, EventIndex, MonthGrid, ViewWindow, WeekStart,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Internal state for the calendar card
#[derive(Debug, Clone)]
pub struct CalendarState {
    /// Selection and visible month
    pub controller: CalendarSelectionController,

    /// Day highlighted for keyboard navigation; always inside the visible month
    pub cursor: CalendarDay,

    pub week_start: WeekStart,

    /// Where the day grid was last drawn, for mouse hit-testing
    pub grid_area: Option<Rect>,
}

impl CalendarState {
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.controller.current_view(), self.week_start)
    }
}

/// Store that holds calendar state. The lock serializes every mutation of
/// the controller, which does no locking of its own.
#[derive(Clone)]
pub struct CalendarStore {
    state: Arc<RwLock<CalendarState>>,
    events: Arc<EventIndex>,
}

impl CalendarStore {
    pub fn new(
        controller: CalendarSelectionController,
        events: Arc<EventIndex>,
        week_start: WeekStart,
        today: CalendarDay,
    ) -> Self {
        let view = controller.current_view();
        let cursor = if view.contains(today) {
            today
        } else {
            clamp_day_to_view(today.day(), view).unwrap_or(today)
        };
        Self {
            state: Arc::new(RwLock::new(CalendarState {
                controller,
                cursor,
                week_start,
                grid_area: None,
            })),
            events,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CalendarState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CalendarState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> CalendarState {
        self.read().clone()
    }

    pub fn events(&self) -> &EventIndex {
        &self.events
    }

    pub fn set_grid_area(&self, area: Option<Rect>) {
        self.write().grid_area = area;
    }

    /// Status line describing how a selection action ended up, read after
    /// the action was reduced. `None` for every other action.
    pub fn selection_status(&self, action: &Action) -> Option<String> {
        let state = self.read();
        let requested = match action {
            Action::SelectDay(day) => *day,
            Action::SelectCursor => state.cursor,
            _ => return None,
        };
        let bounds = state.controller.bounds();
        let status = if !state.controller.is_selected(requested) {
            format!(
                "{} is outside {}..={}, selection unchanged",
                requested,
                bounds.min_year(),
                bounds.max_year()
            )
        } else if self.events.has_event(requested) {
            format!("Selected {} (event day)", requested)
        } else {
            format!("Selected {}", requested)
        };
        Some(status)
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.write();

        match action {
            Action::SelectDay(day) => {
                if state.controller.select_day(*day) {
                    let view = state.controller.current_view();
                    if view.contains(*day) {
                        state.cursor = *day;
                    }
                }
            }

            Action::SelectCursor => {
                let cursor = state.cursor;
                state.controller.select_day(cursor);
            }

            Action::ClearSelection => {
                state.controller.clear_selection();
            }

            Action::ChangeView { year, month } => {
                state.controller.change_view(*year, *month);
                follow_view(&mut state);
            }

            Action::NextMonth => {
                state.controller.next_month();
                follow_view(&mut state);
            }

            Action::PrevMonth => {
                state.controller.prev_month();
                follow_view(&mut state);
            }

            Action::MoveCursor(delta) => {
                if let Some(next) = state.cursor.offset_days(*delta) {
                    move_cursor_to(&mut state, next);
                }
            }

            Action::JumpToToday(today) => {
                move_cursor_to(&mut state, *today);
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}

/// Same day-of-month in `view`, pulled back to the month's last day if needed
fn clamp_day_to_view(day_of_month: u32, view: ViewWindow) -> Option<CalendarDay> {
    let day = day_of_month.min(view.days_in_month());
    CalendarDay::from_ymd(view.year(), view.month(), day).ok()
}

/// Keep the cursor inside the visible month after the view changed
fn follow_view(state: &mut CalendarState) {
    let view = state.controller.current_view();
    if !view.contains(state.cursor) {
        if let Some(cursor) = clamp_day_to_view(state.cursor.day(), view) {
            state.cursor = cursor;
        }
    }
}

/// Move the cursor, paging the view when it leaves the visible month. Days
/// outside the allowed years are ignored.
fn move_cursor_to(state: &mut CalendarState, day: CalendarDay) {
    if !state.controller.bounds().contains(day.year()) {
        log::debug!("Cursor move to {} is outside the allowed years", day);
        return;
    }
    state.cursor = day;
    if !state.controller.current_view().contains(day) {
        state.controller.change_view(day.year(), day.month());
    }
}
