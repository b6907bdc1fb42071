/// Immutable set of event days answering "does this day carry a marker?"
use crate::models::{CalendarDay, ViewWindow};
use std::collections::BTreeSet;

/// The set of days flagged as events. Built once and then only read, so a
/// single instance can be shared across any number of readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIndex {
    days: BTreeSet<CalendarDay>,
}

impl EventIndex {
    /// Build from any collection of days. Order does not matter and
    /// duplicates collapse into one entry.
    pub fn new<I>(days: I) -> Self
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        Self {
            days: days.into_iter().collect(),
        }
    }

    pub fn has_event(&self, day: CalendarDay) -> bool {
        self.days.contains(&day)
    }

    /// Event days inside `view`, in chronological order
    pub fn events_in_month(&self, view: ViewWindow) -> Vec<CalendarDay> {
        match (view.first_day(), view.next().first_day()) {
            (Some(first), Some(following)) => self.days.range(first..following).copied().collect(),
            _ => self
                .days
                .iter()
                .filter(|day| view.contains(**day))
                .copied()
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<CalendarDay> for EventIndex {
    fn from_iter<T: IntoIterator<Item = CalendarDay>>(iter: T) -> Self {
        Self::new(iter)
    }
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

    #[test]
    fn test_has_event_for_configured_days() {
        let index = february_events();
        for d in [5, 12, 15, 22] {
            assert!(index.has_event(day(2024, 2, d)), "day {d} should be an event");
        }
    }

    #[test]
    fn test_unknown_days_have_no_event() {
        let index = february_events();
        assert!(!index.has_event(day(2024, 2, 6)));
        // same day-of-month in another month or year must not match
        assert!(!index.has_event(day(2024, 3, 5)));
        assert!(!index.has_event(day(2023, 2, 5)));
        assert!(!index.has_event(day(9999, 12, 31)));
        assert!(!index.has_event(day(-500, 1, 1)));
    }

    #[test]
    fn test_duplicates_and_order_do_not_matter() {
        let index = EventIndex::new([
            day(2024, 2, 22),
            day(2024, 2, 5),
            day(2024, 2, 22),
            day(2024, 2, 12),
            day(2024, 2, 5),
            day(2024, 2, 15),
        ]);
        assert_eq!(index.len(), 4);
        assert_eq!(index, february_events());
        assert!(index.has_event(day(2024, 2, 22)));
    }

    #[test]
    fn test_empty_index() {
        let index = EventIndex::default();
        assert!(index.is_empty());
        assert!(!index.has_event(day(2024, 2, 5)));
    }

    #[test]
    fn test_events_in_month() {
        let mut days: Vec<CalendarDay> = february_events().iter().copied().collect();
        days.push(day(2024, 1, 31));
        days.push(day(2024, 3, 1));
        let index: EventIndex = days.into_iter().collect();

        let feb = index.events_in_month(ViewWindow::new(2024, 2));
        assert_eq!(
            feb,
            vec![
                day(2024, 2, 5),
                day(2024, 2, 12),
                day(2024, 2, 15),
                day(2024, 2, 22)
            ]
        );
        assert_eq!(
            index.events_in_month(ViewWindow::new(2024, 3)),
            vec![day(2024, 3, 1)]
        );
        assert!(index.events_in_month(ViewWindow::new(2024, 4)).is_empty());
    }

    #[test]
    fn test_events_in_december_include_the_31st() {
        let index = EventIndex::new([day(2024, 12, 31), day(2025, 1, 1)]);
        assert_eq!(
            index.events_in_month(ViewWindow::new(2024, 12)),
            vec![day(2024, 12, 31)]
        );
    }
}
