use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A year in `MIN_YEAR..=MAX_YEAR` (1..=9999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(ParseError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, or `None` at `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get().checked_add(1)?).ok()
    }

    /// The preceding year, or `None` at `MIN_YEAR`.
    pub fn pred(self) -> Option<Self> {
        if self.get() <= MIN_YEAR {
            return None;
        }
        Self::new(self.get() - 1).ok()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Next month, wrapping December to January. The flag is true on wrap.
    pub fn wrapping_succ(self) -> (Self, bool) {
        if self.get() == DECEMBER {
            (Self::january(), true)
        } else {
            (Self(self.0.saturating_add(1)), false)
        }
    }

    /// Previous month, wrapping January to December. The flag is true on wrap.
    pub fn wrapping_pred(self) -> (Self, bool) {
        match NonZeroU8::new(self.get() - 1) {
            Some(prev) => (Self(prev), false),
            None => (Self::december(), true),
        }
    }

    pub(crate) const fn january() -> Self {
        Self(NonZeroU8::MIN)
    }

    pub(crate) fn december() -> Self {
        Self(NonZeroU8::MIN.saturating_add(DECEMBER - JANUARY))
    }

    /// Number of days in this month of `year`.
    pub const fn days(self, year: Year) -> u8 {
        if self.get() == FEBRUARY && year.is_leap() {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.get() as usize]
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of the month, validated against its year and month on construction.
///
/// Not deserializable on its own: without the year and month there is
/// nothing to validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   value,
        };
        let day = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > month.days(year) {
            return Err(invalid());
        }
        Ok(Self(day))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub(crate) const fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    pub(crate) fn last(year: Year, month: Month) -> Self {
        Self(NonZeroU8::MIN.saturating_add(month.days(year) - 1))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    match month {
        FEBRUARY if is_leap_year(year) => Some(FEBRUARY_DAYS_LEAP),
        JANUARY..=MAX_MONTH => Some(DAYS_IN_MONTH[month as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_succ_pred_at_limits() {
        let first = Year::new(1).unwrap();
        let last = Year::new(9999).unwrap();
        assert_eq!(first.pred(), None);
        assert_eq!(last.succ(), None);
        assert_eq!(first.succ().map(Year::get), Some(2));
        assert_eq!(last.pred().map(Year::get), Some(9998));
    }

    #[test]
    fn test_year_display_is_zero_padded() {
        assert_eq!(Year::new(42).unwrap().to_string(), "0042");
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
    }

    #[test]
    fn test_month_bounds() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_wrapping() {
        let dec = Month::new(12).unwrap();
        let jan = Month::new(1).unwrap();
        assert_eq!(dec.wrapping_succ(), (jan, true));
        assert_eq!(jan.wrapping_pred(), (dec, true));
        assert_eq!(
            Month::new(6).unwrap().wrapping_succ(),
            (Month::new(7).unwrap(), false)
        );
        assert_eq!(
            Month::new(6).unwrap().wrapping_pred(),
            (Month::new(5).unwrap(), false)
        );
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "8");
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_day_validated_against_month() {
        let leap = Year::new(2024).unwrap();
        let common = Year::new(2023).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(29, leap, feb).is_ok());
        assert!(Day::new(29, common, feb).is_err());
        assert!(Day::new(30, leap, apr).is_ok());
        assert!(matches!(
            Day::new(31, leap, apr),
            Err(ParseError::InvalidDay {
                year:  2024,
                month: 4,
                day:   31,
            })
        ));
        assert!(Day::new(0, leap, apr).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:    u16,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true },
            TestCase { year: 2023, is_leap: false },
            TestCase { year: 1900, is_leap: false },
            TestCase { year: 2100, is_leap: false },
            TestCase { year: 2000, is_leap: true },
            TestCase { year: 2400, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "year {}", case.year);
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), Some(expected[month as usize]));
        }
        assert_eq!(days_in_month(2024, 2), Some(29));
    }

    #[test]
    fn test_days_in_month_rejects_invalid_month() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, u8::MAX), None);
    }

    #[test]
    fn test_month_days_matches_free_function() {
        for year in [1900, 2000, 2023, 2024] {
            let typed_year = Year::new(year).unwrap();
            for m in 1..=12u8 {
                let month = Month::new(m).unwrap();
                assert_eq!(Some(month.days(typed_year)), days_in_month(year, m), "{year}-{m}");
            }
        }
    }
}
