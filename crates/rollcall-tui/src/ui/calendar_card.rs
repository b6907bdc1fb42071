/// Month calendar card with event markers
use crate::stores::CalendarState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rollcall_core::{CalendarDay, DayCell, EventIndex, MonthGrid, day_cells};

/// Each day takes: 2-digit label, event marker, spacer
pub const CELL_WIDTH: u16 = 4;
pub const GRID_WIDTH: u16 = CELL_WIDTH * 7;
/// Grid plus borders and one column of padding each side
pub const CARD_WIDTH: u16 = GRID_WIDTH + 4;

const EVENT_MARKER: &str = "•";
/// header line + weekday labels above the first week
const GRID_TOP_OFFSET: u16 = 2;

pub struct CalendarCard<'a> {
    state: &'a CalendarState,
    events: &'a EventIndex,
    today: Option<CalendarDay>,
}

impl<'a> CalendarCard<'a> {
    pub fn new(state: &'a CalendarState, events: &'a EventIndex) -> Self {
        Self {
            state,
            events,
            today: None,
        }
    }

    /// Day to highlight as today
    pub fn today(mut self, today: Option<CalendarDay>) -> Self {
        self.today = today;
        self
    }

    /// Render the card and return the area covered by day cells, or `None`
    /// when the card is too small to show the grid.
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<Rect> {
        let block = Block::default()
            .title(" Events Calendar ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < GRID_WIDTH || inner.height <= GRID_TOP_OFFSET {
            Paragraph::new("Window too small")
                .alignment(Alignment::Center)
                .render(inner, buf);
            return None;
        }

        let grid = self.state.grid();
        let view = grid.view();
        let grid_x = inner.x + (inner.width - GRID_WIDTH) / 2;

        // Month/Year header with navigation hints
        let header = Line::from(vec![
            Span::styled("‹ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                view.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ›", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .render(Rect { height: 1, ..inner }, buf);

        let weekdays: Vec<Span> = grid
            .week_start()
            .labels()
            .iter()
            .map(|label| Span::styled(format!("{label:>2}  "), Style::default().fg(Color::Yellow)))
            .collect();
        buf.set_line(grid_x, inner.y + 1, &Line::from(weekdays), GRID_WIDTH);

        let first_row = inner.y + GRID_TOP_OFFSET;
        let rows_available = inner.height - GRID_TOP_OFFSET;
        let cells = day_cells(&grid, self.events, &self.state.controller, self.today);
        for (offset, week) in cells.iter().take(rows_available as usize).enumerate() {
            let spans: Vec<Span> = week
                .iter()
                .flat_map(|slot| match slot {
                    Some(cell) => self.cell_spans(cell),
                    None => vec![Span::raw(" ".repeat(CELL_WIDTH as usize))],
                })
                .collect();
            buf.set_line(grid_x, first_row + offset as u16, &Line::from(spans), GRID_WIDTH);
        }

        let rows = (cells.len() as u16).min(rows_available);
        Some(Rect {
            x: grid_x,
            y: first_row,
            width: GRID_WIDTH,
            height: rows,
        })
    }

    fn cell_spans(&self, cell: &DayCell) -> Vec<Span<'static>> {
        let mut style = if cell.is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if cell.is_today {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        if cell.day == self.state.cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }

        let marker = if cell.has_event { EVENT_MARKER } else { " " };
        vec![
            Span::styled(format!("{:>2}", cell.label), style),
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
        ]
    }
}

/// Day under the terminal position (`column`, `row`), given the area the
/// grid was drawn into. Spacer columns and empty slots hit nothing.
pub fn day_at(grid_area: Rect, grid: &MonthGrid, column: u16, row: u16) -> Option<CalendarDay> {
    let inside = column >= grid_area.x
        && column < grid_area.x + grid_area.width
        && row >= grid_area.y
        && row < grid_area.y + grid_area.height;
    if !inside {
        return None;
    }
    let offset = column - grid_area.x;
    if offset % CELL_WIDTH == CELL_WIDTH - 1 {
        return None;
    }
    grid.day_at(
        (row - grid_area.y) as usize,
        (offset / CELL_WIDTH) as usize,
    )
}
