//! `CalendarDate`: a proleptic Gregorian calendar date.
//!
//! A date is a validated `(year, month, day)` triple.  The supported range is
//! **1000-01-01 to 9999-12-31**; nothing outside it can be constructed, so
//! every `CalendarDate` is a legal input to the holiday and business-day
//! engines.
//!
//! Weekdays and multi-day offsets go through a day count relative to
//! 1970-01-01, using the era-based civil-calendar conversion.

use std::fmt;
use std::str::FromStr;

use crate::weekday::Weekday;
use jbd_core::errors::{Error, Result};
use jbd_core::{ensure, fail};

/// Earliest supported year.
pub const MIN_YEAR: i32 = 1000;

/// Latest supported year.
pub const MAX_YEAR: i32 = 9999;

/// A calendar date without time of day.
///
/// Ordering is chronological (field order is year, month, day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Minimum supported date: January 1, 1000.
    pub const MIN: CalendarDate = CalendarDate {
        year: MIN_YEAR as u16,
        month: 1,
        day: 1,
    };

    /// Maximum supported date: December 31, 9999.
    pub const MAX: CalendarDate = CalendarDate {
        year: MAX_YEAR as u16,
        month: 12,
        day: 31,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        ensure!(
            (1..=12).contains(&month),
            "month {month} out of range [1, 12]"
        );
        let days_in = days_in_month(year, month);
        ensure!(
            day >= 1 && day <= days_in,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Self {
            year: year as u16,
            month,
            day,
        })
    }

    fn from_days_since_epoch(days: i64) -> Result<Self> {
        let (y, m, d) = civil_from_days(days);
        ensure!(
            (MIN_YEAR as i64..=MAX_YEAR as i64).contains(&y),
            "date arithmetic: year {y} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        Ok(Self {
            year: y as u16,
            month: m,
            day: d,
        })
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// The first occurrence is found by offsetting the 1st of the month by
    /// `(weekday − first.weekday) mod 7` days; each further occurrence adds a
    /// week.
    ///
    /// # Errors
    /// * [`Error::InvalidArgument`] if `nth` is zero or the year/month is
    ///   invalid.
    /// * [`Error::ComputationImpossible`] if the month has fewer than `nth`
    ///   such weekdays (e.g. a fifth Monday in February 2024).
    pub fn nth_weekday(year: i32, month: u8, nth: u8, weekday: Weekday) -> Result<Self> {
        ensure!(nth >= 1, "nth_weekday: nth must be >= 1");
        let first = Self::from_ymd(year, month, 1)?;
        let offset = (weekday.number_from_sunday() as i32
            - first.weekday().number_from_sunday() as i32)
            .rem_euclid(7) as u32;
        let day = 1 + offset + 7 * (nth as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            fail!("no {nth}-th {weekday} in {year}-{month:02}");
        }
        Ok(Self {
            day: day as u8,
            ..first
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1000–9999).
    pub fn year(&self) -> i32 {
        self.year as i32
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = MONTH_OFFSET[self.month as usize - 1] + self.day as u16;
        if self.month > 2 && is_leap_year(self.year()) {
            doy += 1;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.days_since_epoch())
    }

    fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year(), self.month, self.day)
    }

    // ── Stepping ──────────────────────────────────────────────────────────────

    /// The following calendar day.
    ///
    /// Returns an error on [`CalendarDate::MAX`].
    pub fn succ(self) -> Result<Self> {
        if self.day < days_in_month(self.year(), self.month) {
            return Ok(Self {
                day: self.day + 1,
                ..self
            });
        }
        if self.month < 12 {
            return Ok(Self {
                month: self.month + 1,
                day: 1,
                ..self
            });
        }
        ensure!(self != Self::MAX, "no supported date after {self}");
        Ok(Self {
            year: self.year + 1,
            month: 1,
            day: 1,
        })
    }

    /// The preceding calendar day.
    ///
    /// Returns an error on [`CalendarDate::MIN`].
    pub fn pred(self) -> Result<Self> {
        if self.day > 1 {
            return Ok(Self {
                day: self.day - 1,
                ..self
            });
        }
        if self.month > 1 {
            let month = self.month - 1;
            return Ok(Self {
                month,
                day: days_in_month(self.year(), month),
                ..self
            });
        }
        ensure!(self != Self::MIN, "no supported date before {self}");
        Ok(Self {
            year: self.year - 1,
            month: 12,
            day: 31,
        })
    }

    /// Advance by `n` calendar days (negative `n` goes backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        Self::from_days_since_epoch(self.days_since_epoch() + n)
    }

    /// Number of calendar days from `self` to `other`; positive if
    /// `other > self`.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        Self { day: 1, ..self }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Self {
            day: days_in_month(self.year(), self.month),
            ..self
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Parsing / formatting ──────────────────────────────────────────────────────

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO-8601 calendar date, `YYYY-MM-DD`.
    ///
    /// Exactly four, two, and two ASCII digits; no sign, padding, or
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        let shape_ok = b.len() == 10
            && b[4] == b'-'
            && b[7] == b'-'
            && b
                .iter()
                .enumerate()
                .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
        ensure!(shape_ok, "'{s}' is not a YYYY-MM-DD date");
        let field = |range: std::ops::Range<usize>| {
            b[range]
                .iter()
                .fold(0u32, |acc, c| acc * 10 + u32::from(c - b'0'))
        };
        let (year, month, day) = (field(0..4), field(5..7), field(8..10));
        Self::from_ymd(year as i32, month as u8, day as u8)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days from 1970-01-01 to `(y, m, d)`; eras are 400-year blocks starting
/// on March 1.
fn days_from_civil(y: i32, m: u8, d: u8) -> i64 {
    let y = if m <= 2 { y as i64 - 1 } else { y as i64 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
