/// Plain-text subcommands that print to stdout
use rollcall_core::{
    CalendarDay, CalendarError, CalendarSelectionController, EventIndex, MonthGrid, ViewWindow,
    WeekStart, day_cells,
};

const CELL_WIDTH: usize = 4;
const GRID_WIDTH: usize = CELL_WIDTH * 7;

/// Render the controller's current month as a text grid. Event days carry a
/// trailing `*` and the selected day a leading `>`, so a selected event day
/// shows both.
pub fn render_month(
    controller: &CalendarSelectionController,
    events: &EventIndex,
    week_start: WeekStart,
) -> String {
    let view = controller.current_view();
    let grid = MonthGrid::new(view, week_start);

    let mut lines = vec![format!("{:^width$}", view.to_string(), width = GRID_WIDTH)];
    lines.push(
        week_start
            .labels()
            .iter()
            .map(|label| format!("{label:>3} "))
            .collect(),
    );
    for week in day_cells(&grid, events, controller, None) {
        let row: String = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => {
                    let lead = if cell.is_selected { '>' } else { ' ' };
                    let marker = if cell.has_event { '*' } else { ' ' };
                    format!("{}{:>2}{}", lead, cell.label, marker)
                }
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        lines.push(row);
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `month [YYYY-MM]`, out-of-range months are clamped like the dashboard does
pub fn month(
    mut controller: CalendarSelectionController,
    events: &EventIndex,
    week_start: WeekStart,
    month: Option<ViewWindow>,
) -> String {
    if let Some(view) = month {
        controller.change_view(view.year(), view.month());
    }
    render_month(&controller, events, week_start)
}

/// `check DATE`
pub fn check(events: &EventIndex, date: &str) -> Result<String, CalendarError> {
    let day: CalendarDay = date.parse()?;
    let verdict = if events.has_event(day) {
        "event"
    } else {
        "no event"
    };
    Ok(format!("{day}: {verdict}"))
}

/// `events [YYYY-MM]`, one day per line
pub fn list_events(events: &EventIndex, month: Option<ViewWindow>) -> String {
    let days: Vec<CalendarDay> = match month {
        Some(view) => events.events_in_month(view),
        None => events.iter().copied().collect(),
    };
    days.iter()
        .map(CalendarDay::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    fn february_events() -> EventIndex {
        EventIndex::new([
            day(2024, 2, 5),
            day(2024, 2, 12),
            day(2024, 2, 15),
            day(2024, 2, 22),
        ])
    }

    fn controller() -> CalendarSelectionController {
        CalendarSelectionController::new(ViewWindow::new(2024, 2), 2020, 2025).unwrap()
    }

    #[test]
    fn test_render_february_2024() {
        let text = render_month(&controller(), &february_events(), WeekStart::Sunday);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "       February 2024");
        assert_eq!(lines[1], " Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], "                  1   2   3");
        assert_eq!(lines[3], "  4   5*  6   7   8   9  10");
        assert_eq!(lines[4], " 11  12* 13  14  15* 16  17");
        assert_eq!(lines[6], " 25  26  27  28  29");
    }

    #[test]
    fn test_render_marks_selection() {
        let mut controller = controller();
        controller.select_day(day(2024, 2, 12));
        let text = render_month(&controller, &february_events(), WeekStart::Monday);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        assert_eq!(lines[3], "  5*  6   7   8   9  10  11");
        assert_eq!(lines[4], ">12* 13  14  15* 16  17  18");
    }

    #[test]
    fn test_render_marks_selected_plain_day() {
        let mut controller = controller();
        controller.select_day(day(2024, 2, 6));
        let text = render_month(&controller, &february_events(), WeekStart::Sunday);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "  4   5*> 6   7   8   9  10");
    }

    #[test]
    fn test_month_clamps_to_bounds() {
        let text = month(
            controller(),
            &february_events(),
            WeekStart::Sunday,
            Some(ViewWindow::new(2030, 2)),
        );
        assert!(text.starts_with("       February 2025"));
    }

    #[test]
    fn test_check() {
        let events = february_events();
        assert_eq!(check(&events, "2024-02-05").unwrap(), "2024-02-05: event");
        assert_eq!(check(&events, "2024-02-06").unwrap(), "2024-02-06: no event");
        assert!(matches!(
            check(&events, "2024-02-30"),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_list_events() {
        let mut events: Vec<CalendarDay> = february_events().iter().copied().collect();
        events.push(day(2024, 3, 1));
        let events = EventIndex::new(events);
        assert_eq!(
            list_events(&events, Some(ViewWindow::new(2024, 2))),
            "2024-02-05\n2024-02-12\n2024-02-15\n2024-02-22"
        );
        assert!(list_events(&events, None).ends_with("2024-03-01"));
        assert_eq!(list_events(&events, Some(ViewWindow::new(2023, 2))), "");
    }
}
