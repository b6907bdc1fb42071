mod day;
mod traits;
mod view;

pub use day::CalendarDay;
pub use traits::{FromJson, FromYaml};
pub use view::{ViewWindow, YearBounds};
