/// Layout manager for the dashboard
use crate::logger::LogBuffer;
use crate::stores::{CalendarState, CalendarStore, UIStore};
use crate::ui::{CARD_WIDTH, CalendarCard, EventsPanel};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use rollcall_core::{CalendarDay, EventIndex};

const KEY_HINTS: &str =
    "←↑↓→ move  Enter select  c clear  n/p month  ]/[ year  t today  ? help  q quit";

const HELP_LINES: [(&str, &str); 10] = [
    ("← → / h l", "previous / next day"),
    ("↑ ↓ / k j", "previous / next week"),
    ("n p / PgDn PgUp", "next / previous month"),
    ("] [", "next / previous year"),
    ("Enter / Space", "select the highlighted day"),
    ("mouse click", "select a day"),
    ("c / Backspace", "clear the selection"),
    ("t", "jump to today"),
    ("?", "toggle this help"),
    ("q / Esc", "quit"),
];

/// Render the complete dashboard
pub fn render_layout(
    frame: &mut Frame,
    calendar_store: &CalendarStore,
    ui_store: &UIStore,
    log_buffer: &LogBuffer,
) {
    let area = frame.area();
    let calendar_state = calendar_store.get_state();
    let ui_state = ui_store.get_state();

    // Main layout: Header | Content | Footer
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Calendar + events
            Constraint::Length(4), // Footer
        ])
        .split(area);

    render_header(
        frame.buffer_mut(),
        vertical_chunks[0],
        &calendar_state,
        calendar_store.events(),
    );

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CARD_WIDTH), Constraint::Min(1)])
        .split(vertical_chunks[1]);

    let grid_area = CalendarCard::new(&calendar_state, calendar_store.events())
        .today(Some(CalendarDay::today()))
        .render(content_chunks[0], frame.buffer_mut());
    calendar_store.set_grid_area(grid_area);

    EventsPanel::from_state(&calendar_state, calendar_store.events())
        .render(content_chunks[1], frame.buffer_mut());

    let status = ui_state
        .status_message
        .clone()
        .or_else(|| log_buffer.get_recent_logs(1).pop())
        .unwrap_or_default();
    render_footer(frame.buffer_mut(), vertical_chunks[2], &status);

    if ui_state.show_help {
        render_help(frame.buffer_mut(), centered_rect(60, 60, area));
    }
}

fn render_header(buf: &mut Buffer, area: Rect, state: &CalendarState, events: &EventIndex) {
    let selection = match state.controller.selection() {
        Some(day) if events.has_event(day) => Span::styled(
            format!("Selected: {} (event day)", day),
            Style::default().fg(Color::Yellow),
        ),
        Some(day) => Span::styled(
            format!("Selected: {}", day),
            Style::default().fg(Color::White),
        ),
        None => Span::styled("No day selected", Style::default().fg(Color::DarkGray)),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Rollcall Attendance",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        selection,
    ]))
    .block(Block::default().borders(Borders::ALL));

    header.render(area, buf);
}

fn render_footer(buf: &mut Buffer, area: Rect, status: &str) {
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));

    footer.render(area, buf);
}

fn render_help(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{keys:>16}  "), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
