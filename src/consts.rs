/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for July, the last month of the odd-long half of the year
pub const JULY: i32 = 7;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Days in a long month (January, March, May, July, August, October, December)
pub const LONG_MONTH_DAYS: i32 = 31;
/// Days in a short month (April, June, September, November)
pub const SHORT_MONTH_DAYS: i32 = 30;
/// Days in February for common years
pub const FEBRUARY_DAYS: i32 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Every fourth year is a leap year, with no century exception
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
