/// UI module - panels and rendering components
pub mod calendar_card;
pub mod events_panel;
pub mod layout;

pub use calendar_card::{CARD_WIDTH, CalendarCard, day_at};
pub use events_panel::EventsPanel;
pub use layout::render_layout;
