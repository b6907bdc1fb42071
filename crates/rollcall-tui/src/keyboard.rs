/// Keyboard and mouse input handling and key mapping
use crate::actions::Action;
use crate::stores::{CalendarStore, UIStore};
use crate::ui::day_at;
use rollcall_core::CalendarDay;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    calendar_store: &CalendarStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();

    // While help is open any key other than quit just closes it
    if ui_state.show_help {
        return match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => Some(Action::ToggleHelp),
        };
    }

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(-7)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(7)),

        // Month navigation
        KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextMonth),
        KeyCode::PageUp | KeyCode::Char('p') => Some(Action::PrevMonth),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::JumpToToday(CalendarDay::today())),
        KeyCode::Char(']') | KeyCode::Char('[') => {
            let view = calendar_store.get_state().controller.current_view();
            let step = if key_event.code == KeyCode::Char(']') { 1 } else { -1 };
            Some(Action::ChangeView {
                year: view.year().saturating_add(step),
                month: view.month(),
            })
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Backspace => {
            Some(Action::ClearSelection)
        }

        _ => None,
    }
}

/// A left click on a day cell selects that day
pub fn handle_mouse_event(mouse_event: MouseEvent, calendar_store: &CalendarStore) -> Option<Action> {
    if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let state = calendar_store.get_state();
    let grid_area = state.grid_area?;
    day_at(grid_area, &state.grid(), mouse_event.column, mouse_event.row).map(Action::SelectDay)
}
