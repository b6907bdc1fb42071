/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod calendar_store;
pub mod ui_store;

pub use calendar_store::{CalendarState, CalendarStore};
pub use ui_store::UIStore;
