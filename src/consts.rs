/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year, indexed by month number (index 0 unused)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of columns in a week row, and of weekday header labels
pub const DAYS_PER_WEEK: usize = 7;

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two ends of a range
pub const RANGE_SEPARATOR: char = '/';
/// Separator for month-first input (`MM/DD/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';
/// Marks the start of a time-of-day suffix that is discarded on parse
pub const TIME_DESIGNATORS: [char; 2] = ['T', ' '];
/// Separator between hours and minutes in a time-of-day suffix
pub const TIME_SEPARATOR: char = ':';

/// Placeholder rendered for a selection endpoint that is not set
pub const OPEN_ENDPOINT: &str = "..";
