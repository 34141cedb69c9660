//! Selection core for a vertically scrolling range calendar.
//!
//! The widget's view layer hit-tests taps and drags down to [`CalendarDate`]
//! values and feeds them to a [`SelectionController`], which owns the
//! start/end endpoints and notifies a [`SelectionObserver`] after each
//! transition. Rendering is driven by the read-only [`DayVisualState`]
//! projection and an injected [`StyleLookup`].

mod config;
mod consts;
mod month;
mod prelude;
mod range;
mod selection;
mod style;
#[cfg(test)]
mod test_utils;
mod types;
mod visual;

pub use config::{CalendarConfig, ConfigError, WeekdayLabels};
pub use consts::*;
pub use month::{DisplayRange, YearMonth};
pub use range::{DateRange, RangeError};
pub use selection::{
    NoopObserver, SelectionChange, SelectionController, SelectionObserver, SelectionState,
};
pub use style::{DayStyle, Rgba, StyleLookup, StyleSheet};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use visual::DayVisualState;

use crate::prelude::*;
use std::str::FromStr;

/// A calendar day with no time-of-day or timezone component.
///
/// Equality and ordering are on `(year, month, day)` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from plain numbers.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// First day of the given month.
    pub fn first_of(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::first(),
        }
    }

    /// Last day of the given month.
    pub fn last_of(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::last(year, month),
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

    /// Returns the day of the month.
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the year as a validated [`Year`].
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the month as a validated [`Month`].
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the day as a validated [`Day`].
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The following day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        if self.day() < self.month.days(self.year) {
            return Self::new(self.year(), self.month(), self.day() + 1).ok();
        }
        let (month, wrapped) = self.month.wrapping_succ();
        let year = if wrapped { self.year.succ()? } else { self.year };
        Some(Self::first_of(year, month))
    }

    /// The preceding day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        if self.day() > MIN_DAY {
            return Self::new(self.year(), self.month(), self.day() - 1).ok();
        }
        let (month, wrapped) = self.month.wrapping_pred();
        let year = if wrapped { self.year.pred()? } else { self.year };
        Some(Self::last_of(year, month))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` or `MM/DD/YYYY`.
    ///
    /// An ISO date may carry a time-of-day suffix (`2024-03-05T14:30:00Z`,
    /// `2024-03-05 14:30`). The suffix must open with `HH:`; the rest of it,
    /// offset included, is discarded, leaving the calendar day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && !has_slash {
            let date_part = match trimmed.split_once(TIME_DESIGNATORS) {
                Some((date, time)) if starts_like_time(time) => date,
                Some((_, time)) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "Expected HH{TIME_SEPARATOR}MM after the date, got {time:?}"
                    )));
                },
                None => trimmed,
            };
            let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
            match parts.as_slice() {
                [y, m, d] => Self::from_parts(y, m, d),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
                ))),
            }
        } else if has_slash && !has_hyphen {
            let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [m, d, y] => Self::from_parts(y, m, d),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected MM{MONTH_FIRST_SEPARATOR}DD{MONTH_FIRST_SEPARATOR}YYYY, got {trimmed}"
                ))),
            }
        } else if has_hyphen {
            Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )))
        } else {
            Err(ParseError::InvalidFormat(trimmed.to_owned()))
        }
    }
}

impl CalendarDate {
    fn from_parts(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        let number = |s: &str| {
            s.parse::<u16>()
                .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
        };
        let small = |s: &str| {
            s.parse::<u8>()
                .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
        };
        Self::new(number(year)?, small(month)?, small(day)?)
    }
}

/// True when `time` opens with a two-digit hour and the time separator.
fn starts_like_time(time: &str) -> bool {
    let mut chars = time.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(h1), Some(h2), Some(TIME_SEPARATOR)) if h1.is_ascii_digit() && h2.is_ascii_digit()
    )
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso() {
        let d = "2024-03-05".parse::<CalendarDate>().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 5));
    }

    #[test]
    fn test_parse_month_first() {
        let d = " 03 / 05 / 2024 ".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(2024, 3, 5));
    }

    #[test]
    fn test_parse_discards_time_of_day() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-03-05T23:59:59Z",
                description: "RFC 3339 timestamp",
            },
            TestCase {
                input:       "2024-03-05T00:00:00+09:00",
                description: "timestamp with offset",
            },
            TestCase {
                input:       "2024-03-05 14:30",
                description: "space-separated time",
            },
        ];

        for case in &cases {
            let parsed = case.input.parse::<CalendarDate>();
            assert_eq!(parsed, Ok(date(2024, 3, 5)), "{}", case.description);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_time_suffix() {
        for input in ["2024-03-05Tgarbage", "2024-03-05T", "2024-03-05 noon", "2024-03-05T1:30"] {
            assert!(
                matches!(input.parse::<CalendarDate>(), Err(ParseError::InvalidFormat(_))),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "2024-13-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            "0000-01-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            "2024-03".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03/05".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-0X-05".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "20240305".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 3, 5).to_string(), "2024-03-05");
        assert_eq!(date(987, 12, 31).to_string(), "0987-12-31");
    }

    #[test]
    fn test_ordering() {
        assert!(date(2024, 3, 5) < date(2024, 3, 6));
        assert!(date(2024, 3, 31) < date(2024, 4, 1));
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 3, 5) <= date(2024, 3, 5));
        assert_eq!(date(2024, 3, 5).max(date(2024, 2, 29)), date(2024, 3, 5));
    }

    #[test]
    fn test_succ_rolls_over() {
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 2, 29).succ(), Some(date(2024, 3, 1)));
        assert_eq!(date(2023, 2, 28).succ(), Some(date(2023, 3, 1)));
        assert_eq!(date(2023, 12, 31).succ(), Some(date(2024, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_pred_rolls_over() {
        assert_eq!(date(2024, 3, 1).pred(), Some(date(2024, 2, 29)));
        assert_eq!(date(2024, 1, 1).pred(), Some(date(2023, 12, 31)));
        assert_eq!(date(2024, 5, 1).pred(), Some(date(2024, 4, 30)));
        assert_eq!(date(1, 1, 1).pred(), None);
    }

    #[test]
    fn test_try_from_tuple() {
        let d: CalendarDate = (2024, 3, 5).try_into().unwrap();
        assert_eq!(d, date(2024, 3, 5));
        assert!(CalendarDate::try_from((2024, 2, 30)).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 3, 5);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-03-05""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
    }
}
