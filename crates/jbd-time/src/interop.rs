//! Conversions to and from `chrono` date types.
//!
//! The core works on [`CalendarDate`] only.  These adapters let callers
//! holding a `NaiveDate` or `NaiveDateTime` run the same computations; for a
//! date-time only the date part is computed on and the time of day is carried
//! over unchanged.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::date::CalendarDate;
use jbd_core::errors::{Error, Result};

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = Error;

    /// Fails with `InvalidArgument` outside years 1000–9999.
    fn try_from(date: NaiveDate) -> Result<Self> {
        // chrono guarantees month in 1..=12 and day in 1..=31
        CalendarDate::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // chrono covers years ±262143, and a CalendarDate is always a valid
        // day in 1000..=9999, so the fallback is unreachable
        let naive = NaiveDate::from_ymd_opt(date.year(), date.month().into(), date.day().into());
        debug_assert!(naive.is_some(), "{date} outside chrono's range");
        naive.unwrap_or_default()
    }
}

/// Apply a date computation to the date part of `datetime`, keeping its time.
///
/// ```
/// use chrono::NaiveDateTime;
/// use jbd_time::interop::map_date_keep_time;
/// use jbd_time::{BusinessDayEngine, Calendar, Configuration};
///
/// let engine = BusinessDayEngine::new(Configuration::new());
/// let fri: NaiveDateTime = "2024-01-05T15:30:00".parse().unwrap();
/// let next = map_date_keep_time(fri, |d| engine.next_business_day(d)).unwrap();
/// assert_eq!(next.to_string(), "2024-01-09 15:30:00");
/// ```
pub fn map_date_keep_time<F>(datetime: NaiveDateTime, f: F) -> Result<NaiveDateTime>
where
    F: FnOnce(CalendarDate) -> Result<CalendarDate>,
{
    let date = CalendarDate::try_from(datetime.date())?;
    let mapped = NaiveDate::from(f(date)?);
    Ok(mapped.and_time(datetime.time()))
}

/// Apply a date predicate to the date part of `datetime`.
pub fn check_date<F>(datetime: NaiveDateTime, f: F) -> Result<bool>
where
    F: FnOnce(CalendarDate) -> Result<bool>,
{
    f(CalendarDate::try_from(datetime.date())?)
}
