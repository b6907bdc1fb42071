/// Side panel listing the event days of the visible month
use crate::stores::CalendarState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListState, Paragraph, StatefulWidget, Widget},
};
use rollcall_core::{CalendarDay, EventIndex};

pub struct EventsPanel {
    pub title: String,
    pub events: Vec<CalendarDay>,
    pub selected: Option<CalendarDay>,
}

impl EventsPanel {
    pub fn from_state(state: &CalendarState, index: &EventIndex) -> Self {
        let view = state.controller.current_view();
        let events = index.events_in_month(view);
        Self {
            title: format!(" Events in {} ({}) ", view, events.len()),
            events,
            selected: state.controller.selection(),
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title.as_str())
            .border_style(Style::default().fg(Color::White));

        if self.events.is_empty() {
            Paragraph::new("No events this month")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<Line> = self
            .events
            .iter()
            .map(|day| Line::from(format!(" {}", day.naive_date().format("%a %d %b %Y"))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(
            self.selected
                .and_then(|selected| self.events.iter().position(|d| *d == selected)),
        );

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
