//! Shorthand constructors for tests.

use crate::{CalendarDate, SelectionState, YearMonth};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day)
        .unwrap_or_else(|e| panic!("bad test date {year}-{month}-{day}: {e}"))
}

pub fn year_month(year: u16, month: u8) -> YearMonth {
    YearMonth::new(year, month).unwrap_or_else(|e| panic!("bad test month {year}-{month}: {e}"))
}

pub fn selection(start: Option<CalendarDate>, end: Option<CalendarDate>) -> SelectionState {
    SelectionState::new(start, end)
}
