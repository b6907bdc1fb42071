pub mod config;
mod event_index;
mod exceptions;
mod grid;
mod loader;
mod models;
mod selection;

// public api
pub use config::CalendarConfig;
pub use event_index::EventIndex;
pub use exceptions::CalendarError;
pub use grid::{day_cells, DayCell, MonthGrid, Week, WeekStart};
pub use loader::load_event_file;
pub use models::{CalendarDay, FromJson, FromYaml, ViewWindow, YearBounds};
pub use selection::CalendarSelectionController;
