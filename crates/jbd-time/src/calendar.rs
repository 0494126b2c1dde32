//! `Calendar` trait: business-day arithmetic on top of a business-day
//! predicate.
//!
//! An implementor only supplies [`Calendar::is_business_day`]; every other
//! operation is a skip search that steps one calendar day at a time and
//! re-tests the predicate.  Searches are bounded by the supported date range,
//! and walking off either end is reported as an
//! [`InvalidArgument`](jbd_core::Error::InvalidArgument) error rather than a
//! partial result.

use std::fmt;

use crate::date::CalendarDate;
use jbd_core::errors::Result;

/// How [`Calendar::adjust`] moves a date that is not a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Next business day.
    Following,
    /// Next business day, or the previous one if the next is in another
    /// month.
    ModifiedFollowing,
    /// Previous business day.
    Preceding,
    /// Previous business day, or the next one if the previous is in another
    /// month.
    ModifiedPreceding,
    /// Leave the date alone.
    Unadjusted,
    /// Closer of the next and previous business days; ties go forward.
    Nearest,
    /// Last business day of the date's month.
    EndOfMonth,
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "following",
            BusinessDayConvention::ModifiedFollowing => "modified following",
            BusinessDayConvention::Preceding => "preceding",
            BusinessDayConvention::ModifiedPreceding => "modified preceding",
            BusinessDayConvention::Unadjusted => "unadjusted",
            BusinessDayConvention::Nearest => "nearest",
            BusinessDayConvention::EndOfMonth => "end of month",
        };
        write!(f, "{s}")
    }
}

/// A business-day calendar.
pub trait Calendar: fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day.
    fn is_business_day(&self, date: CalendarDate) -> Result<bool>;

    /// First business day strictly after `date`.
    fn next_business_day(&self, date: CalendarDate) -> Result<CalendarDate> {
        let mut d = date.succ()?;
        while !self.is_business_day(d)? {
            d = d.succ()?;
        }
        Ok(d)
    }

    /// Last business day strictly before `date`.
    fn previous_business_day(&self, date: CalendarDate) -> Result<CalendarDate> {
        let mut d = date.pred()?;
        while !self.is_business_day(d)? {
            d = d.pred()?;
        }
        Ok(d)
    }

    /// Advance `date` by `n` business days.
    ///
    /// `n == 0` returns `date` when it is a business day and the next
    /// business day otherwise; negative `n` moves backwards.
    fn add_business_days(&self, date: CalendarDate, n: i32) -> Result<CalendarDate> {
        match n {
            0 => snap_forward(self, date),
            n if n < 0 => step_back(self, date, n.unsigned_abs()),
            n => step_forward(self, date, n.unsigned_abs()),
        }
    }

    /// Move `date` back by `n` business days.
    ///
    /// `n == 0` behaves exactly like [`Calendar::add_business_days`] with
    /// zero: it snaps *forward* to the next business day.  Negative `n` moves
    /// forwards.
    fn subtract_business_days(&self, date: CalendarDate, n: i32) -> Result<CalendarDate> {
        match n {
            0 => snap_forward(self, date),
            n if n < 0 => step_forward(self, date, n.unsigned_abs()),
            n => step_back(self, date, n.unsigned_abs()),
        }
    }

    /// Count business days in `(start, end]`.
    ///
    /// Zero when the dates are equal and negated when `start > end`.
    fn business_days_between(&self, start: CalendarDate, end: CalendarDate) -> Result<i32> {
        if start == end {
            return Ok(0);
        }
        if start > end {
            return Ok(-self.business_days_between(end, start)?);
        }
        let mut count = 0;
        let mut d = start;
        while d < end {
            d = d.succ()?;
            if self.is_business_day(d)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Every business day in `[start, end]`, ascending; empty if
    /// `start > end`.
    fn business_day_list(&self, start: CalendarDate, end: CalendarDate) -> Result<Vec<CalendarDate>> {
        let mut days = Vec::new();
        if start > end {
            return Ok(days);
        }
        let mut d = start;
        loop {
            if self.is_business_day(d)? {
                days.push(d);
            }
            if d == end {
                return Ok(days);
            }
            d = d.succ()?;
        }
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: CalendarDate, convention: BusinessDayConvention) -> Result<CalendarDate> {
        use BusinessDayConvention::*;
        match convention {
            Unadjusted => Ok(date),
            Following => snap_forward(self, date),
            Preceding => snap_back(self, date),
            ModifiedFollowing => {
                let adjusted = snap_forward(self, date)?;
                if adjusted.month() != date.month() {
                    snap_back(self, date)
                } else {
                    Ok(adjusted)
                }
            }
            ModifiedPreceding => {
                let adjusted = snap_back(self, date)?;
                if adjusted.month() != date.month() {
                    snap_forward(self, date)
                } else {
                    Ok(adjusted)
                }
            }
            Nearest => {
                if self.is_business_day(date)? {
                    return Ok(date);
                }
                let fwd = self.next_business_day(date)?;
                let bwd = self.previous_business_day(date)?;
                if date.days_until(fwd) <= bwd.days_until(date) {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
            EndOfMonth => self.end_of_month(date),
        }
    }

    /// Last business day of the month containing `date`.
    ///
    /// Falls back to the last business day before the month when the whole
    /// month is closed.
    fn end_of_month(&self, date: CalendarDate) -> Result<CalendarDate> {
        snap_back(self, date.end_of_month())
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: CalendarDate) -> Result<bool> {
        Ok(self.is_business_day(date)? && self.end_of_month(date)? == date)
    }
}

/// `date` itself if it is a business day, else the next one.
fn snap_forward<C: Calendar + ?Sized>(cal: &C, date: CalendarDate) -> Result<CalendarDate> {
    if cal.is_business_day(date)? {
        Ok(date)
    } else {
        cal.next_business_day(date)
    }
}

/// `date` itself if it is a business day, else the previous one.
fn snap_back<C: Calendar + ?Sized>(cal: &C, date: CalendarDate) -> Result<CalendarDate> {
    if cal.is_business_day(date)? {
        Ok(date)
    } else {
        cal.previous_business_day(date)
    }
}

fn step_forward<C: Calendar + ?Sized>(
    cal: &C,
    mut date: CalendarDate,
    mut remaining: u32,
) -> Result<CalendarDate> {
    while remaining > 0 {
        date = date.succ()?;
        if cal.is_business_day(date)? {
            remaining -= 1;
        }
    }
    Ok(date)
}

fn step_back<C: Calendar + ?Sized>(
    cal: &C,
    mut date: CalendarDate,
    mut remaining: u32,
) -> Result<CalendarDate> {
    while remaining > 0 {
        date = date.pred()?;
        if cal.is_business_day(date)? {
            remaining -= 1;
        }
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    /// Saturdays and Sundays off, nothing else.
    #[derive(Debug)]
    struct WeekendsOnly;

    impl Calendar for WeekendsOnly {
        fn name(&self) -> &str {
            "Weekends Only"
        }

        fn is_business_day(&self, date: CalendarDate) -> Result<bool> {
            Ok(!date.weekday().is_weekend())
        }
    }

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_next_and_previous_are_strict() {
        let cal = WeekendsOnly;
        // 2023-09-01 Friday, 2023-09-04 Monday
        assert_eq!(cal.next_business_day(date(2023, 9, 1)).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.previous_business_day(date(2023, 9, 4)).unwrap(), date(2023, 9, 1));
        assert_eq!(cal.next_business_day(date(2023, 9, 5)).unwrap(), date(2023, 9, 6));
    }

    #[test]
    fn test_zero_offset_snaps_forward_both_ways() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.add_business_days(sat, 0).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.subtract_business_days(sat, 0).unwrap(), date(2023, 9, 4));
        let wed = date(2023, 9, 6);
        assert_eq!(cal.add_business_days(wed, 0).unwrap(), wed);
        assert_eq!(cal.subtract_business_days(wed, 0).unwrap(), wed);
    }

    #[test]
    fn test_negative_offsets_flip_direction() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        assert_eq!(cal.add_business_days(mon, -1).unwrap(), date(2023, 9, 1));
        assert_eq!(cal.subtract_business_days(mon, -1).unwrap(), date(2023, 9, 5));
        assert_eq!(cal.subtract_business_days(mon, 5).unwrap(), date(2023, 8, 28));
    }

    #[test]
    fn test_offsets_running_off_the_range_fail() {
        let cal = WeekendsOnly;
        assert!(cal
            .add_business_days(CalendarDate::MAX, 1)
            .unwrap_err()
            .is_invalid_argument());
        assert!(cal.add_business_days(CalendarDate::MIN, i32::MIN).is_err());
    }

    #[test]
    fn test_adjust_conventions() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Following).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Preceding).unwrap(), date(2023, 9, 1));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted).unwrap(), sat);
        // Saturday is one day from Friday, two from Monday
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Nearest).unwrap(), date(2023, 9, 1));
        // Sunday is one day from Monday
        let sun = date(2023, 9, 3);
        assert_eq!(cal.adjust(sun, BusinessDayConvention::Nearest).unwrap(), date(2023, 9, 4));

        // 2023-09-30 is a Saturday; following would leave September
        let end = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(end, BusinessDayConvention::ModifiedFollowing).unwrap(),
            date(2023, 9, 29)
        );
        // 2023-10-01 is a Sunday; preceding would leave October
        let start = date(2023, 10, 1);
        assert_eq!(
            cal.adjust(start, BusinessDayConvention::ModifiedPreceding).unwrap(),
            date(2023, 10, 2)
        );
        assert_eq!(
            cal.adjust(date(2023, 9, 12), BusinessDayConvention::EndOfMonth).unwrap(),
            date(2023, 9, 29)
        );
    }

    #[test]
    fn test_month_end() {
        let cal = WeekendsOnly;
        assert!(cal.is_end_of_month(date(2023, 9, 29)).unwrap());
        assert!(!cal.is_end_of_month(date(2023, 9, 30)).unwrap());
        assert!(!cal.is_end_of_month(date(2023, 9, 28)).unwrap());
    }

    #[test]
    fn test_business_day_list_is_inclusive() {
        let cal = WeekendsOnly;
        let days = cal.business_day_list(date(2023, 9, 1), date(2023, 9, 5)).unwrap();
        assert_eq!(days, [date(2023, 9, 1), date(2023, 9, 4), date(2023, 9, 5)]);
        assert!(days.iter().all(|d| d.weekday() != Weekday::Saturday));
        assert!(cal
            .business_day_list(date(2023, 9, 5), date(2023, 9, 1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 business days (d1 exclusive)
        assert_eq!(cal.business_days_between(d1, d2).unwrap(), 4);
        assert_eq!(cal.business_days_between(d2, d1).unwrap(), -4);
        assert_eq!(cal.business_days_between(d1, d1).unwrap(), 0);
    }
}
