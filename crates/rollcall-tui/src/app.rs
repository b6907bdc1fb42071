/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::keyboard;
use crate::logger::LogBuffer;
use crate::stores::{CalendarStore, UIStore};
use crate::ui::render_layout;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use rollcall_core::{CalendarDay, CalendarSelectionController, EventIndex, WeekStart};
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub struct App {
    dispatcher: Dispatcher,
    calendar_store: CalendarStore,
    ui_store: UIStore,
    /// Captured application logs, last line shown in the footer
    log_buffer: LogBuffer,
}

impl App {
    pub fn new(
        controller: CalendarSelectionController,
        events: Arc<EventIndex>,
        week_start: WeekStart,
        log_buffer: LogBuffer,
    ) -> (Self, ActionReceiver) {
        let (dispatcher, rx) = Dispatcher::new();
        let calendar_store =
            CalendarStore::new(controller, events, week_start, CalendarDay::today());
        (
            Self {
                dispatcher,
                calendar_store,
                ui_store: UIStore::new(),
                log_buffer,
            },
            ActionReceiver::new(rx),
        )
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        let event_days = self.calendar_store.events().len();
        log::info!("Dashboard started with {} event days", event_days);
        self.dispatcher.dispatch(Action::ShowStatus(format!(
            "Loaded {} event days, press ? for help",
            event_days
        )));

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.calendar_store,
                    &self.ui_store,
                    &self.log_buffer,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                // Poll for keyboard and mouse events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        match event::read()? {
                            // Only process key press events (not release)
                            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                                if let Some(action) =
                                    keyboard::handle_key_event(
                                        key_event,
                                        &self.ui_store,
                                        &self.calendar_store,
                                    )
                                {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                            Event::Mouse(mouse_event) => {
                                if let Some(action) =
                                    keyboard::handle_mouse_event(mouse_event, &self.calendar_store)
                                {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                            _ => {}
                        }
                    }
                }

                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    /// Route an action to every store
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        self.calendar_store.reduce(action);
        self.ui_store.reduce(action);

        if let Some(status) = self.calendar_store.selection_status(action) {
            self.ui_store.reduce(&Action::ShowStatus(status));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::ViewWindow;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_dispatched_actions_reach_the_stores() {
        let controller =
            CalendarSelectionController::new(ViewWindow::new(2024, 2), 2020, 2025).unwrap();
        let events = Arc::new(EventIndex::new([day(2024, 2, 5)]));
        let (mut app, mut receiver) =
            App::new(controller, events, WeekStart::Sunday, LogBuffer::new());

        app.dispatcher.dispatch(Action::SelectDay(day(2024, 2, 5)));
        app.dispatcher.dispatch(Action::Quit);
        while let Some(action) = receiver.recv().await {
            app.handle_action(&action);
            if action == Action::Quit {
                break;
            }
        }

        assert!(app.calendar_store.get_state().controller.is_selected(day(2024, 2, 5)));
        assert!(app.ui_store.should_exit());
    }

    #[test]
    fn test_ignored_selection_is_reported() {
        let controller =
            CalendarSelectionController::new(ViewWindow::new(2024, 2), 2020, 2025).unwrap();
        let (mut app, _receiver) = App::new(
            controller,
            Arc::new(EventIndex::default()),
            WeekStart::Sunday,
            LogBuffer::new(),
        );

        app.handle_action(&Action::SelectDay(day(2019, 12, 31)));

        assert_eq!(app.calendar_store.get_state().controller.selection(), None);
        assert_eq!(
            app.ui_store.get_state().status_message.as_deref(),
            Some("2019-12-31 is outside 2020..=2025, selection unchanged")
        );
    }
}
