//! Japanese public holidays.
//!
//! [`HolidayEngine`] layers four rules:
//!
//! 1. fixed month/day holidays;
//! 2. the vernal and autumnal equinox days (see [`crate::equinox`]);
//! 3. "happy Monday" holidays, observed on the n-th Monday of a month;
//! 4. substitute holidays (*furikae kyūjitsu*): when a holiday from rules
//!    1–3 falls on a Sunday, the following Monday is a holiday too, unless
//!    it already is one.  Substitutes never cascade.

use std::collections::HashSet;

use crate::date::{CalendarDate, MAX_YEAR, MIN_YEAR};
use crate::equinox::Equinox;
use crate::holiday::{Holiday, HolidayKind};
use crate::weekday::Weekday;
use jbd_core::ensure;
use jbd_core::errors::Result;

/// Name given to every substitute holiday.
pub const SUBSTITUTE_HOLIDAY: &str = "Substitute Holiday";

/// (month, day, name)
const FIXED_HOLIDAYS: [(u8, u8, &str); 10] = [
    (1, 1, "New Year's Day"),
    (2, 11, "National Foundation Day"),
    (4, 29, "Showa Day"),
    (5, 3, "Constitution Memorial Day"),
    (5, 4, "Greenery Day"),
    (5, 5, "Children's Day"),
    (8, 11, "Mountain Day"),
    (11, 3, "Culture Day"),
    (11, 23, "Labor Thanksgiving Day"),
    (12, 23, "Emperor's Birthday"),
];

/// (month, n-th Monday, name)
const HAPPY_MONDAYS: [(u8, u8, &str); 4] = [
    (1, 2, "Coming of Age Day"),
    (7, 3, "Marine Day"),
    (9, 3, "Respect for the Aged Day"),
    (10, 2, "Sports Day"),
];

const EQUINOXES: [Equinox; 2] = [Equinox::Vernal, Equinox::Autumnal];

/// Japanese national holiday rules.
///
/// Stateless; every answer is a pure function of its argument.
///
/// # Errors
/// Years must lie in `[1000, 9999]`; anything else is
/// [`InvalidArgument`](jbd_core::Error::InvalidArgument).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolidayEngine;

impl HolidayEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    /// Return `true` if `date` is a national holiday of any kind.
    pub fn is_holiday(&self, date: CalendarDate) -> Result<bool> {
        Ok(self.holiday_on(date)?.is_some())
    }

    /// Return the holiday observed on `date`, if any.
    ///
    /// Fixed holidays take precedence over equinoxes, equinoxes over happy
    /// Mondays, and all of those over substitutes.
    pub fn holiday_on(&self, date: CalendarDate) -> Result<Option<Holiday>> {
        if let Some(holiday) = self.primary_holiday_on(date)? {
            return Ok(Some(holiday));
        }
        if self.follows_sunday_holiday(date)? {
            return Ok(Some(Holiday::new(
                date,
                SUBSTITUTE_HOLIDAY,
                HolidayKind::Substitute,
            )));
        }
        Ok(None)
    }

    /// Return `true` if `date` qualifies as a substitute holiday.
    ///
    /// That is: `date` is a Monday and the Sunday before it is a fixed,
    /// equinox, or happy-Monday holiday.  This holds even when `date` is a
    /// holiday in its own right; [`holidays_in_year`](Self::holidays_in_year)
    /// and [`holiday_on`](Self::holiday_on) report the other holiday then.
    pub fn is_substitute_holiday(&self, date: CalendarDate) -> Result<bool> {
        self.follows_sunday_holiday(date)
    }

    /// All holidays of `year`, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<Holiday>> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let mut holidays =
            Vec::with_capacity(FIXED_HOLIDAYS.len() + EQUINOXES.len() + HAPPY_MONDAYS.len() + 4);

        for (month, day, name) in FIXED_HOLIDAYS {
            let date = CalendarDate::from_ymd(year, month, day)?;
            holidays.push(Holiday::new(date, name, HolidayKind::Fixed));
        }
        for equinox in EQUINOXES {
            let date = equinox.date(year)?;
            holidays.push(Holiday::new(date, equinox.name(), HolidayKind::Calculated));
        }
        for (month, nth, name) in HAPPY_MONDAYS {
            let date = CalendarDate::nth_weekday(year, month, nth, Weekday::Monday)?;
            holidays.push(Holiday::new(date, name, HolidayKind::HappyMonday));
        }

        let mut taken: HashSet<CalendarDate> = holidays.iter().map(Holiday::date).collect();
        let mut substitutes = Vec::new();
        for holiday in holidays.iter().filter(|h| h.date().weekday() == Weekday::Sunday) {
            let Ok(monday) = holiday.date().succ() else {
                continue;
            };
            if monday.year() == year && taken.insert(monday) {
                substitutes.push(Holiday::new(
                    monday,
                    SUBSTITUTE_HOLIDAY,
                    HolidayKind::Substitute,
                ));
            }
        }
        holidays.extend(substitutes);

        // stable sort: on a shared date the earlier rule stays first
        holidays.sort_by_key(Holiday::date);
        holidays.dedup_by_key(|h| h.date());
        tracing::trace!(year, count = holidays.len(), "computed holidays for year");
        Ok(holidays)
    }

    /// Holidays in the inclusive range `[start, end]`; empty if
    /// `start > end`.
    pub fn holidays_between(&self, start: CalendarDate, end: CalendarDate) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::new();
        if start > end {
            return Ok(holidays);
        }
        for year in start.year()..=end.year() {
            holidays.extend(
                self.holidays_in_year(year)?
                    .into_iter()
                    .filter(|h| (start..=end).contains(&h.date())),
            );
        }
        Ok(holidays)
    }

    /// Vernal Equinox Day of `year`.
    pub fn vernal_equinox(&self, year: i32) -> Result<CalendarDate> {
        Equinox::Vernal.date(year)
    }

    /// Autumnal Equinox Day of `year`.
    pub fn autumnal_equinox(&self, year: i32) -> Result<CalendarDate> {
        Equinox::Autumnal.date(year)
    }

    /// Rules 1–3 only.
    fn primary_holiday_on(&self, date: CalendarDate) -> Result<Option<Holiday>> {
        let (month, day) = (date.month(), date.day());

        if let Some((_, _, name)) = FIXED_HOLIDAYS
            .iter()
            .find(|(m, d, _)| *m == month && *d == day)
        {
            return Ok(Some(Holiday::new(date, *name, HolidayKind::Fixed)));
        }

        for equinox in EQUINOXES.iter().filter(|e| e.month() == month) {
            if equinox.date(date.year())? == date {
                return Ok(Some(Holiday::new(
                    date,
                    equinox.name(),
                    HolidayKind::Calculated,
                )));
            }
        }

        if date.weekday() == Weekday::Monday {
            for (_, nth, name) in HAPPY_MONDAYS.iter().filter(|(m, _, _)| *m == month) {
                if CalendarDate::nth_weekday(date.year(), month, *nth, Weekday::Monday)? == date {
                    return Ok(Some(Holiday::new(date, *name, HolidayKind::HappyMonday)));
                }
            }
        }

        Ok(None)
    }

    /// `date` is a Monday and the Sunday before it is a rule 1–3 holiday.
    fn follows_sunday_holiday(&self, date: CalendarDate) -> Result<bool> {
        if date.weekday() != Weekday::Monday {
            return Ok(false);
        }
        let Ok(sunday) = date.pred() else {
            return Ok(false);
        };
        Ok(self.primary_holiday_on(sunday)?.is_some())
    }
}
