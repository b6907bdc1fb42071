/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use rollcall_core::CalendarDay;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ===== Calendar Actions (user-initiated) =====
    /// User clicked a day cell
    SelectDay(CalendarDay),

    /// User selected the day under the keyboard cursor
    SelectCursor,

    /// User cleared the current selection
    ClearSelection,

    /// Show a specific month
    ChangeView { year: i32, month: u32 },

    /// Month arrows
    NextMonth,
    PrevMonth,

    /// Move the keyboard cursor by a signed number of days
    MoveCursor(i64),

    /// Move the cursor (and the view) to today, as read by the input layer
    JumpToToday(CalendarDay),

    // ===== UI Actions =====
    /// User toggled the help overlay
    ToggleHelp,

    /// Message for the status line
    ShowStatus(String),

    /// Application should exit
    Quit,
}
