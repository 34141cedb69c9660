//! Months as display units.
//!
//! The calendar scrolls through a run of consecutive months; [`DisplayRange`]
//! names that run and [`YearMonth`] names each month in it. Which week row a
//! day lands in is the view layer's business and is not modelled here.

use std::{fmt, iter, num::NonZeroU16, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DATE_SEPARATOR, Month, ParseError, Year};

/// A single month of a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year:  Year,
    month: Month,
}

impl YearMonth {
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth` when out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// The month a date falls in.
    pub const fn of(date: CalendarDate) -> Self {
        Self {
            year:  date.year_typed(),
            month: date.month_typed(),
        }
    }

    /// Returns the year component.
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12).
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Number of days in this month, leap years included.
    pub const fn days_in_month(&self) -> u8 {
        self.month.days(self.year)
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::first_of(self.year, self.month)
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::last_of(self.year, self.month)
    }

    /// Checks if a date falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        Self::of(date) == *self
    }

    /// The following month, or `None` after December 9999.
    pub fn next(&self) -> Option<Self> {
        let (month, wrapped) = self.month.wrapping_succ();
        let year = if wrapped { self.year.succ()? } else { self.year };
        Some(Self { year, month })
    }

    /// The preceding month, or `None` before January of year 1.
    pub fn prev(&self) -> Option<Self> {
        let (month, wrapped) = self.month.wrapping_pred();
        let year = if wrapped { self.year.pred()? } else { self.year };
        Some(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DATE_SEPARATOR}{}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (year, month) = trimmed
            .split_once(DATE_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let year = year
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(year.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(month.to_owned()))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

const MONTHS_PER_YEAR: NonZeroU16 = NonZeroU16::MIN.saturating_add(11);

/// The consecutive months the calendar scrolls through, starting at `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayRange {
    first:       YearMonth,
    month_count: NonZeroU16,
}

impl DisplayRange {
    pub const fn new(first: YearMonth, month_count: NonZeroU16) -> Self {
        Self { first, month_count }
    }

    /// Twelve months starting with the month of `date`.
    pub const fn year_from(date: CalendarDate) -> Self {
        Self::new(YearMonth::of(date), MONTHS_PER_YEAR)
    }

    /// Returns the first displayed month.
    pub const fn first(&self) -> YearMonth {
        self.first
    }

    /// Returns the requested number of months.
    pub const fn month_count(&self) -> u16 {
        self.month_count.get()
    }

    /// The displayed months in scroll order.
    ///
    /// Stops early if the run would pass December 9999.
    pub fn months(&self) -> impl Iterator<Item = YearMonth> + use<> {
        iter::successors(Some(self.first), YearMonth::next).take(usize::from(self.month_count.get()))
    }

    /// The last displayed month.
    pub fn last(&self) -> YearMonth {
        self.months().last().unwrap_or(self.first)
    }

    /// Returns the first day of the first displayed month.
    pub fn first_day(&self) -> CalendarDate {
        self.first.first_day()
    }

    /// Returns the last day of the last displayed month.
    pub fn last_day(&self) -> CalendarDate {
        self.last().last_day()
    }

    /// Checks if a date falls in any displayed month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Pulls a date outside the displayed months onto the nearest shown day.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        date.clamp(self.first_day(), self.last_day())
    }
}
