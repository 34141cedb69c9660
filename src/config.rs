use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DAYS_PER_WEEK, DisplayRange, ParseError, StyleSheet, YearMonth, prelude::*};

/// Error type for widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The weekday header needs one label per column.
    #[error("Expected {} weekday labels, found {found}", DAYS_PER_WEEK)]
    WeekdayLabelCount { found: usize },

    #[error("Invalid colour {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("Display range must cover at least one month")]
    EmptyDisplayRange,

    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Column headers for the week rows, first column first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WeekdayLabels([String; DAYS_PER_WEEK]);

impl WeekdayLabels {
    pub const fn new(labels: [String; DAYS_PER_WEEK]) -> Self {
        Self(labels)
    }

    /// Label for a column in `0..DAYS_PER_WEEK`.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }
}

impl Default for WeekdayLabels {
    fn default() -> Self {
        Self(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(str::to_owned))
    }
}

impl TryFrom<Vec<String>> for WeekdayLabels {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        let found = labels.len();
        <[String; DAYS_PER_WEEK]>::try_from(labels)
            .map(Self)
            .map_err(|_| ConfigError::WeekdayLabelCount { found })
    }
}

impl TryFrom<&[&str]> for WeekdayLabels {
    type Error = ConfigError;

    fn try_from(labels: &[&str]) -> Result<Self, Self::Error> {
        labels
            .iter()
            .map(|label| (*label).to_owned())
            .collect::<Vec<_>>()
            .try_into()
    }
}

impl From<WeekdayLabels> for Vec<String> {
    fn from(labels: WeekdayLabels) -> Self {
        labels.0.into()
    }
}

/// Everything the view layer needs besides the selection itself.
///
/// Deserializes from any serde format; omitted fields fall back to their
/// defaults. Without a `display` entry the calendar shows the twelve months
/// starting at the host's current month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub weekday_labels: WeekdayLabels,
    pub styles:         StyleSheet,
    pub display:        Option<DisplayRange>,
}

impl CalendarConfig {
    /// Default labels and styles over `month_count` months from `first` (`YYYY-MM`).
    ///
    /// # Errors
    /// Returns `ConfigError::ParseError` for a malformed month and
    /// `ConfigError::EmptyDisplayRange` for a zero count.
    pub fn for_months(first: &str, month_count: u16) -> Result<Self, ConfigError> {
        let first = first.parse::<YearMonth>()?;
        let month_count = std::num::NonZeroU16::new(month_count).ok_or(ConfigError::EmptyDisplayRange)?;
        Ok(Self {
            display: Some(DisplayRange::new(first, month_count)),
            ..Self::default()
        })
    }

    /// The configured months, or a year from `today` when none are configured.
    pub fn display_range(&self, today: CalendarDate) -> DisplayRange {
        self.display.unwrap_or_else(|| DisplayRange::year_from(today))
    }
}
